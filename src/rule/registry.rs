//! 规则注册表
//! 按注册顺序保存全部规则，键唯一；构建完成后只读共享

use tracing::{debug, warn};

use super::core::ModelRule;
use super::families::builtin_rules;
use crate::error::{RsmError, RsmResult};

/// 规则注册表
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn ModelRule>>,
}

impl RuleRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// 仅包含内置规则的注册表
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in builtin_rules() {
            // 内置规则键应互不相同，冲突属于程序缺陷
            if let Err(e) = registry.register(rule) {
                warn!("内置规则注册失败：{}", e);
            }
        }
        registry
    }

    /// 注册规则；键已存在时拒绝注册，保留先注册的规则
    pub fn register(&mut self, rule: Box<dyn ModelRule>) -> RsmResult<()> {
        if self.contains(rule.key()) {
            return Err(RsmError::RuleConflict(rule.key().to_string()));
        }
        debug!("注册解析规则：{}（序号 {}）", rule.key(), self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// 链式注册
    pub fn with_rule(mut self, rule: impl ModelRule + 'static) -> RsmResult<Self> {
        self.register(Box::new(rule))?;
        Ok(self)
    }

    /// 全部规则（注册顺序）
    pub fn all(&self) -> impl Iterator<Item = &dyn ModelRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// 全部规则键（注册顺序）
    pub fn keys(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.key()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&dyn ModelRule> {
        self.all().find(|rule| rule.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.rules.iter().any(|rule| rule.key() == key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::FieldMap;

    struct NamedRule(&'static str);

    impl ModelRule for NamedRule {
        fn key(&self) -> &str {
            self.0
        }

        fn matches(&self, _model: &str) -> bool {
            false
        }

        fn extract(&self, model: &str) -> RsmResult<FieldMap> {
            Ok(FieldMap::with_model(model))
        }
    }

    #[test]
    fn test_builtin_order() {
        let registry = RuleRegistry::builtin();
        assert_eq!(
            registry.keys(),
            vec!["motor_ac", "plc_ab200", "sensor_tx", "sv630p", "xyz100"]
        );
        // 内置规则无键冲突，全部注册成功
        assert_eq!(registry.len(), builtin_rules().len());
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NamedRule("a"))).unwrap();
        registry.register(Box::new(NamedRule("b"))).unwrap();

        let err = registry.register(Box::new(NamedRule("a"))).unwrap_err();
        assert!(matches!(err, RsmError::RuleConflict(ref key) if key == "a"));
        assert_eq!(registry.keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_lookup_by_key() {
        let registry = RuleRegistry::builtin();
        assert!(registry.get("sv630p").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 5);
        assert!(RuleRegistry::new().is_empty());
    }
}
