//! 解析模块：型号解析核心逻辑
pub mod global;
pub mod resolver;

// 导出核心接口
pub use self::global::{
    get_global_resolver, init_global_resolver, init_global_resolver_with_config, parse_model,
    parse_models,
};
pub use self::resolver::ModelResolver;
