//! XYZ100 系列通用驱动
//! 分隔符编码：XY1<类型>-<电压>-<功率>[-<功能>]

use crate::error::RsmResult;
use crate::rule::core::ModelRule;
use crate::rule::model::FieldMap;
use crate::rule::segment::{CharView, CodeTable, Segments, lookup_segment};

const PREFIXES: [&str; 2] = ["XY1A", "XY1B"];
const SEPARATOR: char = '-';

const TYPE_TABLE: CodeTable = &[("A", "脉冲"), ("B", "总线")];

/// XYZ100 规则
#[derive(Debug, Clone, Copy, Default)]
pub struct Xyz100Rule;

impl ModelRule for Xyz100Rule {
    fn key(&self) -> &str {
        "xyz100"
    }

    fn matches(&self, model: &str) -> bool {
        PREFIXES.iter().any(|prefix| model.starts_with(prefix))
    }

    fn extract(&self, model: &str) -> RsmResult<FieldMap> {
        let segs = Segments::split(model, SEPARATOR);
        // 类型码为首段最后一个字符
        let type_code = segs.get(0).and_then(|head| CharView::new(head).last());

        Ok(FieldMap::with_model(model)
            .field("系列", "XYZ100")
            .field("类型", lookup_segment(TYPE_TABLE, type_code))
            .field("电压", segs.get_or_empty(1))
            .field("功率", segs.get_or_empty(2))
            .field("功能", segs.get_or_empty(3)))
    }
}
