//! AB200 系列 PLC
//! 末三位为 I/O 点数，型号中出现 E 表示以太网接口

use crate::error::RsmResult;
use crate::rule::core::ModelRule;
use crate::rule::model::FieldMap;
use crate::rule::segment::CharView;

const PREFIX: &str = "AB200";
const IO_DIGITS: usize = 3;
const ETHERNET_MARKER: char = 'E';

/// PLC 规则（前缀不区分大小写）
#[derive(Debug, Clone, Copy, Default)]
pub struct PlcAb200Rule;

impl ModelRule for PlcAb200Rule {
    fn key(&self) -> &str {
        "plc_ab200"
    }

    fn matches(&self, model: &str) -> bool {
        model.to_uppercase().starts_with(PREFIX)
    }

    fn extract(&self, model: &str) -> RsmResult<FieldMap> {
        let interface = if model.contains(ETHERNET_MARKER) {
            "Ethernet"
        } else {
            "串口"
        };

        Ok(FieldMap::with_model(model)
            .field("系列", "PLC AB200")
            .field("I/O点数", CharView::new(model).tail(IO_DIGITS))
            .field("通信接口", interface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethernet_variant() {
        let result = PlcAb200Rule.extract("AB200-E-064").unwrap();
        let expected = FieldMap::with_model("AB200-E-064")
            .field("系列", "PLC AB200")
            .field("I/O点数", "064")
            .field("通信接口", "Ethernet");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_serial_variant_lowercase_prefix() {
        assert!(PlcAb200Rule.matches("ab200s032"));
        let result = PlcAb200Rule.extract("ab200s032").unwrap();
        assert_eq!(result.get("I/O点数"), Some("032"));
        // 标记字符区分大小写
        assert_eq!(result.get("通信接口"), Some("串口"));
    }
}
