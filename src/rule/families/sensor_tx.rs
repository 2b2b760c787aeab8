//! TX 系列传感器
//! 分隔符编码：TX-<测量类型>-<量程>-<版本>，例：TX-PT-10K-V1

use crate::error::RsmResult;
use crate::rule::core::ModelRule;
use crate::rule::model::FieldMap;
use crate::rule::segment::Segments;

const PREFIX: &str = "TX";
const SEPARATOR: char = '-';

/// 传感器规则
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorTxRule;

impl ModelRule for SensorTxRule {
    fn key(&self) -> &str {
        "sensor_tx"
    }

    fn matches(&self, model: &str) -> bool {
        model.starts_with(PREFIX)
    }

    fn extract(&self, model: &str) -> RsmResult<FieldMap> {
        let segs = Segments::split(model, SEPARATOR);

        Ok(FieldMap::with_model(model)
            .field("系列", "TX传感器")
            .field("测量类型", segs.get_or_empty(1))
            .field("量程", segs.get_or_empty(2))
            .field("版本", segs.get_or_empty(3)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_model() {
        let result = SensorTxRule.extract("TX-PT-10K-V1").unwrap();
        assert_eq!(result.get("测量类型"), Some("PT"));
        assert_eq!(result.get("量程"), Some("10K"));
        assert_eq!(result.get("版本"), Some("V1"));
    }

    #[test]
    fn test_no_separator() {
        let result = SensorTxRule.extract("TX100").unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.get("测量类型"), Some(""));
        assert_eq!(result.get("版本"), Some(""));
    }
}
