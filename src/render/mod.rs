//! 渲染模块：将解析结果输出为 JSON 或表格
pub mod json;
pub mod table;

pub use self::json::{to_compact_json, to_json};
pub use self::table::{EMPTY_TABLE, collect_headers, to_table};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{RsmError, RsmResult};
use crate::rule::FieldMap;

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    #[default]
    Json,
}

/// 按格式渲染
pub fn render(rows: &[FieldMap], format: OutputFormat) -> RsmResult<String> {
    match format {
        OutputFormat::Table => Ok(to_table(rows)),
        OutputFormat::Json => to_json(rows),
    }
}

/// 将批量结果整理为可展示的行：解析缺陷渲染为带错误字段的普通行
pub fn into_rows<S: AsRef<str>>(models: &[S], results: Vec<RsmResult<FieldMap>>) -> Vec<FieldMap> {
    models
        .iter()
        .zip(results)
        .map(|(model, result)| match result {
            Ok(fields) => fields,
            Err(e) => FieldMap::defect(model.as_ref(), &defect_reason(&e)),
        })
        .collect()
}

// 缺陷错误只展示原因，其余错误展示完整信息
fn defect_reason(err: &RsmError) -> String {
    match err {
        RsmError::RuleDefect { rule, reason, .. } => format!("{}: {}", rule, reason),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::ERROR_KEY;

    #[test]
    fn test_into_rows_renders_defects_inline() {
        let models = ["SV630PS2R8I", "BRK-1"];
        let results = vec![
            Ok(FieldMap::with_model("SV630PS2R8I")),
            Err(RsmError::RuleDefect {
                rule: "broken".to_string(),
                model: "BRK-1".to_string(),
                reason: "index out of range".to_string(),
            }),
        ];

        let rows = into_rows(&models, results);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].model(), Some("BRK-1"));
        assert_eq!(rows[1].get(ERROR_KEY), Some("解析失败: broken: index out of range"));
    }

    #[test]
    fn test_mixed_batch_table() {
        let resolver = crate::resolver::ModelResolver::builtin();
        let models = ["SV630PS2R8I", "ABC123", "AC-M-2KW-1500-90", "XY1A-220-05KW-F"];
        let rows = into_rows(&models, resolver.resolve_all(&models));

        let table = to_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + models.len());

        let header: Vec<&str> = lines[0].split(" | ").map(str::trim_end).collect();
        assert_eq!(
            header,
            vec![
                "型号", "产品组族", "产品系列", "产品类型", "电压等级", "额定电流", "安装方式",
                "错误", "系列", "额定功率", "额定转速", "机座号", "类型", "电压", "功率", "功能",
            ]
        );

        // 只有一条分隔线
        let rule_lines = lines
            .iter()
            .filter(|l| l.chars().all(|c| c == '-' || c == '+'))
            .count();
        assert_eq!(rule_lines, 1);
        assert!(lines[1].starts_with('-'));
        assert!(lines[3].starts_with("ABC123"));
    }

    #[test]
    fn test_render_dispatch() {
        let rows = vec![FieldMap::unrecognized("ABC123")];
        assert!(render(&rows, OutputFormat::Json).unwrap().starts_with('['));
        assert!(render(&rows, OutputFormat::Table).unwrap().starts_with("型号"));
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
