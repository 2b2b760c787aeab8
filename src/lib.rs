//! rsmodelparser - 基于规则注册表的工业设备型号解析引擎
//!
//! 型号依次交给已注册的规则检测，首个命中的规则负责把型号拆解为字段表；
//! 未命中任何规则时返回带错误标记的未识别结果。
//!
//! ```
//! use rsmodelparser::ModelResolver;
//!
//! let resolver = ModelResolver::builtin();
//! let fields = resolver.resolve("SV630PS2R8I").unwrap();
//! assert_eq!(fields.get("额定电流"), Some("2.8A"));
//! ```

// 导出全局错误类型
pub use self::error::{RsmError, RsmResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig};

// 导出规则模块核心接口
pub use self::rule::{
    DeclarativeRule, FieldMap, ModelRule, RuleDefinition, RuleLoader, RuleRegistry,
    ERROR_KEY, MODEL_KEY, UNKNOWN_MARKER, UNRECOGNIZED_MARKER,
};

// 导出解析模块核心接口
pub use self::resolver::{
    ModelResolver, get_global_resolver, init_global_resolver, init_global_resolver_with_config,
    parse_model, parse_models,
};

// 导出渲染模块核心接口
pub use self::render::{OutputFormat, into_rows, render, to_json, to_table};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod render;
pub mod resolver;
pub mod rule;
pub mod server;
pub mod utils;
