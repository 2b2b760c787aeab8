//! 规则核心接口
//! 每条规则由「检测」与「提取」两部分组成，彼此独立，不感知其他规则

use super::model::FieldMap;
use crate::error::RsmResult;

/// 型号解析规则
///
/// 实现约定：
/// - `matches` 必须廉价且无副作用，对任意输入（含空串、畸形串）都不得 panic
/// - 对 `matches` 返回 true 的型号，`extract` 必须成功；段缺失时输出空字符串，
///   查表未命中时输出 "未知"
/// - 规则无状态，可在多线程间共享
pub trait ModelRule: Send + Sync {
    /// 规则唯一键（注册名）
    fn key(&self) -> &str;

    /// 型号是否属于本规则
    fn matches(&self, model: &str) -> bool;

    /// 将型号拆解为字段表
    fn extract(&self, model: &str) -> RsmResult<FieldMap>;
}

impl std::fmt::Debug for dyn ModelRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRule").field("key", &self.key()).finish()
    }
}
