//! 解析结果数据模型
//! FieldMap：保持插入顺序的字段表，支持序列化/反序列化

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 保留字段：原始型号
pub const MODEL_KEY: &str = "型号";
/// 保留字段：错误标记
pub const ERROR_KEY: &str = "错误";
/// 未命中任何规则时的错误标记值
pub const UNRECOGNIZED_MARKER: &str = "未识别型号规则";
/// 查表未命中时的标记值
pub const UNKNOWN_MARKER: &str = "未知";

/// 有序字段表（字段名 -> 字段值）
///
/// 字段顺序即插入顺序；重复插入同名字段时原位替换值，不改变顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// 创建已写入保留字段 `型号` 的字段表
    pub fn with_model(model: &str) -> Self {
        let mut map = Self::new();
        map.insert(MODEL_KEY, model);
        map
    }

    /// 未识别结果：仅包含原始型号与错误标记
    pub fn unrecognized(model: &str) -> Self {
        Self::with_model(model).field(ERROR_KEY, UNRECOGNIZED_MARKER)
    }

    /// 解析缺陷结果（用于展示层把单条失败渲染为普通行）
    pub fn defect(model: &str, reason: &str) -> Self {
        Self::with_model(model).field(ERROR_KEY, format!("解析失败: {}", reason))
    }

    /// 插入字段，同名字段原位替换
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// 链式插入
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 原始型号
    pub fn model(&self) -> Option<&str> {
        self.get(MODEL_KEY)
    }

    /// 是否为未识别结果
    pub fn is_unrecognized(&self) -> bool {
        self.get(ERROR_KEY) == Some(UNRECOGNIZED_MARKER)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// ======== 为 FieldMap 实现 Display trait（用于日志输出） ========
impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        write!(f, "}}")
    }
}

// ======== 序列化：按插入顺序输出为 JSON 对象 ========
impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct FieldMapVisitor;

impl<'de> Visitor<'de> for FieldMapVisitor {
    type Value = FieldMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of string fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldMap, A::Error> {
        let mut map = FieldMap::new();
        while let Some((k, v)) = access.next_entry::<String, String>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldMapVisitor)
    }
}
