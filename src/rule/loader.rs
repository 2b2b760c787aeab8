//! 规则加载管理器
//! 负责组装注册表：内置规则在前，规则文件中的声明式规则按文件及文件内顺序追加

use std::path::Path;

use tracing::{debug, info};

use super::core::ModelRule;
use super::declarative::{DeclarativeRule, RuleDefinition};
use super::registry::RuleRegistry;
use crate::config::GlobalConfig;
use crate::error::{RsmError, RsmResult};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 按配置构建注册表
    pub fn load(config: &GlobalConfig) -> RsmResult<RuleRegistry> {
        let mut registry = RuleRegistry::builtin();

        for path in &config.rule_files {
            let rules = Self::load_file(path)?;
            for rule in rules {
                debug!("声明式规则 {}：匹配器 {}", rule.key(), rule.matcher().describe());
                registry.register(Box::new(rule)).map_err(|e| {
                    RsmError::RuleLoadError(format!("{}：{}", path.display(), e))
                })?;
            }
        }

        info!("✅ 已加载解析规则: {:?}", registry.keys());
        Ok(registry)
    }

    /// 读取单个规则文件
    pub fn load_file(path: &Path) -> RsmResult<Vec<DeclarativeRule>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RsmError::RuleLoadError(format!("读取规则文件 {} 失败：{}", path.display(), e))
        })?;
        let rules = Self::load_str(&content)?;
        debug!("规则文件 {} 解析成功，规则数：{}", path.display(), rules.len());
        Ok(rules)
    }

    /// 从 JSON 文本解析规则（顶层为规则数组）；任一规则无效则整体失败
    pub fn load_str(content: &str) -> RsmResult<Vec<DeclarativeRule>> {
        let defs: Vec<RuleDefinition> = serde_json::from_str(content)?;
        defs.into_iter().map(DeclarativeRule::compile).collect()
    }
}
