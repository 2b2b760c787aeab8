//! 工具模块：通用辅助能力
pub mod logger;

pub use self::logger::init_logger;
