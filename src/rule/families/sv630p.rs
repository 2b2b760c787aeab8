//! SV630 系列伺服驱动器
//! 定长位置编码：SV 630 P S 2R8 I
//!               族 系列 类型 电压 电流 安装

use crate::error::RsmResult;
use crate::rule::core::ModelRule;
use crate::rule::model::FieldMap;
use crate::rule::segment::{CharView, CodeTable, lookup_segment};

const FAMILY_TABLE: CodeTable = &[("SV", "Servo")];

const TYPE_TABLE: CodeTable = &[("P", "脉冲型"), ("A", "CANlink"), ("C", "CANopen")];

const VOLTAGE_TABLE: CodeTable = &[("S", "220V"), ("T", "380V")];

const CURRENT_TABLE: CodeTable = &[
    ("1R6", "1.6A"),
    ("2R8", "2.8A"),
    ("3R5", "3.5A"),
    ("5R4", "5.4A"),
    ("5R5", "5.5A"),
    ("7R6", "7.6A"),
    ("012", "12A"),
    ("017", "16.5A"),
    ("021", "20.8A"),
    ("026", "25.7A"),
];

const MOUNTING_TABLE: CodeTable = &[("I", "基板标准")];

const PREFIX: &str = "SV630";

/// 伺服驱动器规则
#[derive(Debug, Clone, Copy, Default)]
pub struct Sv630pRule;

impl ModelRule for Sv630pRule {
    fn key(&self) -> &str {
        "sv630p"
    }

    fn matches(&self, model: &str) -> bool {
        model.starts_with(PREFIX)
    }

    fn extract(&self, model: &str) -> RsmResult<FieldMap> {
        let view = CharView::new(model);

        Ok(FieldMap::with_model(model)
            .field("产品组族", lookup_segment(FAMILY_TABLE, view.range(0, 2)))
            .field("产品系列", view.range(2, 5).unwrap_or_default())
            .field("产品类型", lookup_segment(TYPE_TABLE, view.at(5)))
            .field("电压等级", lookup_segment(VOLTAGE_TABLE, view.at(6)))
            // 电流码占据第 7 位到倒数第 2 位
            .field("额定电流", lookup_segment(CURRENT_TABLE, view.between(7, 1)))
            .field("安装方式", lookup_segment(MOUNTING_TABLE, view.last())))
    }
}
