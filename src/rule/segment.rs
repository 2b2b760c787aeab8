//! 型号切分工具
//! 按分隔符或字符位置切分型号，并通过静态码表映射字段值
//! 所有操作按字符（而非字节）计数，任意输入都不会越界

use super::model::UNKNOWN_MARKER;

/// 静态码表：编码 -> 字段值
pub type CodeTable = &'static [(&'static str, &'static str)];

/// 按分隔符切分后的型号段
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    pub fn split(model: &'a str, separator: char) -> Self {
        Self {
            parts: model.split(separator).collect(),
        }
    }

    /// 第 index 段；缺失时为 None
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.parts.get(index).copied()
    }

    /// 第 index 段；缺失时为空字符串
    pub fn get_or_empty(&self, index: usize) -> String {
        self.get(index).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// 按字符位置访问型号
#[derive(Debug, Clone)]
pub struct CharView {
    chars: Vec<char>,
}

impl CharView {
    pub fn new(model: &str) -> Self {
        Self {
            chars: model.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// [start, end) 区间，越界部分自动截断；区间为空时返回 None
    pub fn range(&self, start: usize, end: usize) -> Option<String> {
        let end = end.min(self.chars.len());
        if start >= end {
            return None;
        }
        Some(self.chars[start..end].iter().collect())
    }

    /// 单个字符位置
    pub fn at(&self, index: usize) -> Option<String> {
        self.chars.get(index).map(|c| c.to_string())
    }

    /// 最后一个字符
    pub fn last(&self) -> Option<String> {
        self.chars.last().map(|c| c.to_string())
    }

    /// 从 start 开始到倒数第 skip_tail 个字符之前
    pub fn between(&self, start: usize, skip_tail: usize) -> Option<String> {
        let end = self.chars.len().saturating_sub(skip_tail);
        self.range(start, end)
    }

    /// 末尾 n 个字符（不足 n 个时返回全部）
    pub fn tail(&self, n: usize) -> String {
        let start = self.chars.len().saturating_sub(n);
        self.chars[start..].iter().collect()
    }
}

/// 查表；未命中返回 "未知"
pub fn lookup(table: CodeTable, code: &str) -> String {
    table
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| UNKNOWN_MARKER.to_string())
}

/// 段缺失时为空字符串，存在时查表
pub fn lookup_segment(table: CodeTable, code: Option<String>) -> String {
    match code {
        Some(code) => lookup(table, &code),
        None => String::new(),
    }
}
