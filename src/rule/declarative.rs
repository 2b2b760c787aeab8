//! 声明式规则
//! 由 JSON 规则文件描述的分隔符型规则：匹配器 + 常量字段 + 分段字段

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::core::ModelRule;
use super::model::{ERROR_KEY, FieldMap, MODEL_KEY, UNKNOWN_MARKER};
use super::segment::Segments;
use crate::error::{RsmError, RsmResult};

fn default_separator() -> char {
    '-'
}

/// 规则文件中的单条规则定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub key: String,
    pub matcher: MatcherDefinition,
    #[serde(default = "default_separator")]
    pub separator: char,
    /// 固定字段，按顺序写在型号之后
    #[serde(default)]
    pub constants: Vec<ConstantField>,
    /// 分段字段，按顺序写在固定字段之后
    #[serde(default)]
    pub fields: Vec<SegmentField>,
}

/// 匹配器定义
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatcherDefinition {
    StartsWith {
        value: String,
        #[serde(default)]
        ignore_case: bool,
    },
    Contains {
        value: String,
        #[serde(default)]
        ignore_case: bool,
    },
    Regex {
        pattern: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentField {
    pub name: String,
    /// 按分隔符切分后的段序号（从 0 开始）
    pub segment: usize,
    /// 可选码表；段值不在表中时输出 "未知"
    #[serde(default)]
    pub lookup: Option<HashMap<String, String>>,
}

/// 编译后的匹配器
#[derive(Debug, Clone)]
pub enum Matcher {
    StartsWith { value: String, ignore_case: bool }, // 前缀匹配
    Contains { value: String, ignore_case: bool },   // 包含匹配
    Regex(Regex),                                    // 正则匹配
}

impl Matcher {
    pub fn compile(def: &MatcherDefinition) -> RsmResult<Self> {
        let matcher = match def {
            MatcherDefinition::StartsWith { value, ignore_case } => Matcher::StartsWith {
                value: Self::normalize(value, *ignore_case)?,
                ignore_case: *ignore_case,
            },
            MatcherDefinition::Contains { value, ignore_case } => Matcher::Contains {
                value: Self::normalize(value, *ignore_case)?,
                ignore_case: *ignore_case,
            },
            MatcherDefinition::Regex { pattern } => Matcher::Regex(Regex::new(pattern)?),
        };
        Ok(matcher)
    }

    // 匹配值不能为空，否则会吞掉所有型号
    fn normalize(value: &str, ignore_case: bool) -> RsmResult<String> {
        if value.is_empty() {
            return Err(RsmError::RuleParseError("匹配值不能为空".to_string()));
        }
        Ok(if ignore_case {
            value.to_lowercase()
        } else {
            value.to_string()
        })
    }

    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::StartsWith { value, ignore_case: true } => {
                input.to_lowercase().starts_with(value.as_str())
            }
            Matcher::StartsWith { value, ignore_case: false } => input.starts_with(value.as_str()),
            Matcher::Contains { value, ignore_case: true } => {
                input.to_lowercase().contains(value.as_str())
            }
            Matcher::Contains { value, ignore_case: false } => input.contains(value.as_str()),
            Matcher::Regex(regex) => regex.is_match(input),
        }
    }

    /// 规则描述，如 `starts_with(md500, ignore_case)`
    pub fn describe(&self) -> String {
        match self {
            Matcher::StartsWith { value, ignore_case } => {
                format!("starts_with({}{})", value, Self::case_suffix(*ignore_case))
            }
            Matcher::Contains { value, ignore_case } => {
                format!("contains({}{})", value, Self::case_suffix(*ignore_case))
            }
            Matcher::Regex(r) => format!("regex({})", r.as_str()),
        }
    }

    fn case_suffix(ignore_case: bool) -> &'static str {
        if ignore_case { ", ignore_case" } else { "" }
    }
}

/// 声明式规则
#[derive(Debug, Clone)]
pub struct DeclarativeRule {
    key: String,
    matcher: Matcher,
    separator: char,
    constants: Vec<ConstantField>,
    fields: Vec<SegmentField>,
}

impl DeclarativeRule {
    /// 校验并编译规则定义
    pub fn compile(def: RuleDefinition) -> RsmResult<Self> {
        if def.key.trim().is_empty() {
            return Err(RsmError::RuleParseError("规则键不能为空".to_string()));
        }

        let matcher = Matcher::compile(&def.matcher)
            .map_err(|e| RsmError::RuleParseError(format!("规则 {} 的匹配器无效：{}", def.key, e)))?;

        // 输出字段名唯一，且不得覆盖保留键
        let mut names = HashSet::new();
        let outputs = def
            .constants
            .iter()
            .map(|c| c.name.as_str())
            .chain(def.fields.iter().map(|f| f.name.as_str()));
        for name in outputs {
            if name.trim().is_empty() {
                return Err(RsmError::RuleParseError(format!("规则 {} 存在空字段名", def.key)));
            }
            if name == MODEL_KEY || name == ERROR_KEY {
                return Err(RsmError::RuleParseError(format!(
                    "规则 {} 不能使用保留字段名：{}",
                    def.key, name
                )));
            }
            if !names.insert(name) {
                return Err(RsmError::RuleParseError(format!(
                    "规则 {} 字段名重复：{}",
                    def.key, name
                )));
            }
        }

        Ok(Self {
            key: def.key,
            matcher,
            separator: def.separator,
            constants: def.constants,
            fields: def.fields,
        })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl ModelRule for DeclarativeRule {
    fn key(&self) -> &str {
        &self.key
    }

    fn matches(&self, model: &str) -> bool {
        self.matcher.is_match(model)
    }

    fn extract(&self, model: &str) -> RsmResult<FieldMap> {
        let segs = Segments::split(model, self.separator);
        let mut map = FieldMap::with_model(model);

        for constant in &self.constants {
            map.insert(constant.name.as_str(), constant.value.as_str());
        }

        for field in &self.fields {
            let value = match (segs.get(field.segment), &field.lookup) {
                (None, _) => String::new(),
                (Some(seg), None) => seg.to_string(),
                (Some(seg), Some(table)) => table
                    .get(seg)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_MARKER.to_string()),
            };
            map.insert(field.name.as_str(), value);
        }

        Ok(map)
    }
}
