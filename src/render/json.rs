//! JSON 渲染：对象数组，字段按插入顺序输出，非 ASCII 字符不转义

use crate::error::RsmResult;
use crate::rule::FieldMap;

/// 格式化为带缩进的 JSON
pub fn to_json(rows: &[FieldMap]) -> RsmResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// 格式化为单行 JSON
pub fn to_compact_json(rows: &[FieldMap]) -> RsmResult<String> {
    Ok(serde_json::to_string(rows)?)
}
