//! 规则模块：规则接口、内置型号族、声明式规则与注册表
pub mod core;
pub mod declarative;
pub mod families;
pub mod loader;
pub mod model;
pub mod registry;
pub mod segment;

// 导出核心接口
pub use self::core::ModelRule;
pub use self::declarative::{DeclarativeRule, Matcher, MatcherDefinition, RuleDefinition};
pub use self::loader::RuleLoader;
pub use self::model::{
    ERROR_KEY, FieldMap, MODEL_KEY, UNKNOWN_MARKER, UNRECOGNIZED_MARKER,
};
pub use self::registry::RuleRegistry;
