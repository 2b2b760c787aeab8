//! 表格渲染
//! 列为所有行字段的并集（按首次出现顺序），缺失字段留空，列宽取表头与值的最大字符数

use crate::rule::FieldMap;

/// 空结果时的输出
pub const EMPTY_TABLE: &str = "无解析结果";

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

/// 所有行字段的并集，保持首次出现顺序
pub fn collect_headers(rows: &[FieldMap]) -> Vec<&str> {
    let mut headers: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !headers.contains(&key) {
                headers.push(key);
            }
        }
    }
    headers
}

/// 格式化为定宽文本表格
pub fn to_table(rows: &[FieldMap]) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let headers = collect_headers(rows);
    let widths: Vec<usize> = headers
        .iter()
        .map(|h| {
            rows.iter()
                .map(|row| row.get(h).unwrap_or_default().chars().count())
                .max()
                .unwrap_or(0)
                .max(h.chars().count())
        })
        .collect();

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.clone()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(RULE_SEPARATOR),
    );
    for row in rows {
        let cells = headers
            .iter()
            .map(|h| row.get(h).unwrap_or_default())
            .collect();
        lines.push(format_line(cells));
    }

    lines.join("\n")
}
