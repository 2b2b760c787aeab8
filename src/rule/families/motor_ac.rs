//! AC 系列交流电机
//! 分隔符编码：AC-M-<功率>-<转速>-<机座号>

use crate::error::RsmResult;
use crate::rule::core::ModelRule;
use crate::rule::model::FieldMap;
use crate::rule::segment::Segments;

const PREFIX: &str = "AC-M";
const SEPARATOR: char = '-';

/// 交流电机规则
#[derive(Debug, Clone, Copy, Default)]
pub struct MotorAcRule;

impl ModelRule for MotorAcRule {
    fn key(&self) -> &str {
        "motor_ac"
    }

    fn matches(&self, model: &str) -> bool {
        model.starts_with(PREFIX)
    }

    fn extract(&self, model: &str) -> RsmResult<FieldMap> {
        // 第 0、1 段为 "AC"、"M" 族标识
        let segs = Segments::split(model, SEPARATOR);

        Ok(FieldMap::with_model(model)
            .field("系列", "AC电机")
            .field("额定功率", segs.get_or_empty(2))
            .field("额定转速", segs.get_or_empty(3))
            .field("机座号", segs.get_or_empty(4)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_model() {
        let result = MotorAcRule.extract("AC-M-2KW-1500-90").unwrap();
        let expected = FieldMap::with_model("AC-M-2KW-1500-90")
            .field("系列", "AC电机")
            .field("额定功率", "2KW")
            .field("额定转速", "1500")
            .field("机座号", "90");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_missing_trailing_segments() {
        let result = MotorAcRule.extract("AC-M-750W").unwrap();
        assert_eq!(result.get("额定功率"), Some("750W"));
        assert_eq!(result.get("额定转速"), Some(""));
        assert_eq!(result.get("机座号"), Some(""));
    }
}
