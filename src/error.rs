//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RsmError {
    // 规则注册相关错误
    #[error("规则键冲突：{0} 已注册")]
    RuleConflict(String),
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则定义无效：{0}")]
    RuleParseError(String),

    // 解析相关错误
    #[error("规则 {rule} 解析型号 {model} 失败：{reason}")]
    RuleDefect {
        rule: String,
        model: String,
        reason: String,
    },
    #[error("解析器初始化失败：{0}")]
    ResolverInitError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
    #[error("异步任务执行失败：{0}")]
    AsyncTaskError(String),
}

impl RsmError {
    /// 是否为单条型号的解析缺陷（批量模式下只影响该条）
    pub fn is_defect(&self) -> bool {
        matches!(self, RsmError::RuleDefect { .. })
    }
}

// 全局Result类型
pub type RsmResult<T> = Result<T, RsmError>;
