//! 解析器核心：按注册顺序匹配规则，首个命中规则负责提取字段

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::config::{GlobalConfig, MAX_BATCH_WORKERS};
use crate::error::{RsmError, RsmResult};
use crate::rule::{FieldMap, ModelRule, RuleLoader, RuleRegistry};

// 并发批量解析时每个工作者分到的块数
const CHUNKS_PER_WORKER: usize = 4;

/// 型号解析器
///
/// 持有只读注册表，可跨线程共享，解析过程无锁、无可变状态。
#[derive(Debug, Clone)]
pub struct ModelResolver {
    registry: Arc<RuleRegistry>,
}

impl ModelResolver {
    /// 按配置创建解析器（内置规则 + 规则文件）
    pub fn new(config: &GlobalConfig) -> RsmResult<Self> {
        let registry = RuleLoader::load(config)?;
        Ok(Self::with_registry(registry))
    }

    /// 使用已构建的注册表
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// 仅使用内置规则
    pub fn builtin() -> Self {
        Self::with_registry(RuleRegistry::builtin())
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// 查找首个命中的规则（先注册者优先）
    pub fn detect(&self, model: &str) -> Option<&dyn ModelRule> {
        self.registry.all().find(|rule| rule.matches(model))
    }

    /// 解析单个型号
    ///
    /// 未命中任何规则时返回未识别结果；命中规则但提取失败（含 panic）属于规则缺陷，
    /// 以 `RsmError::RuleDefect` 返回。
    pub fn resolve(&self, model: &str) -> RsmResult<FieldMap> {
        let Some(rule) = self.detect(model) else {
            debug!("型号未命中任何规则：{}", model);
            return Ok(FieldMap::unrecognized(model));
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| rule.extract(model)));
        let reason = match outcome {
            Ok(Ok(fields)) => {
                debug!("型号匹配成功：规则={}，结果={}", rule.key(), fields);
                return Ok(fields);
            }
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        warn!("规则 {} 提取型号 {} 失败：{}", rule.key(), model, reason);
        Err(RsmError::RuleDefect {
            rule: rule.key().to_string(),
            model: model.to_string(),
            reason,
        })
    }

    /// 批量解析：顺序执行，结果与输入一一对应，单条失败不影响其他条目
    pub fn resolve_all<S: AsRef<str>>(&self, models: &[S]) -> Vec<RsmResult<FieldMap>> {
        models.iter().map(|m| self.resolve(m.as_ref())).collect()
    }

    /// 批量解析：分块投递到阻塞线程池并发执行，按输入顺序重组结果
    ///
    /// 某个分块任务异常时，仅该分块内的条目返回错误。
    pub async fn resolve_all_concurrent(
        &self,
        models: Vec<String>,
        workers: usize,
    ) -> Vec<RsmResult<FieldMap>> {
        if models.is_empty() {
            return Vec::new();
        }

        let workers = workers.clamp(1, MAX_BATCH_WORKERS.min(Semaphore::MAX_PERMITS));
        let chunk_size = models
            .len()
            .div_ceil(workers.saturating_mul(CHUNKS_PER_WORKER));
        let semaphore = Arc::new(Semaphore::new(workers));

        let mut tasks = Vec::with_capacity(models.len().div_ceil(chunk_size));
        for chunk in models.chunks(chunk_size) {
            let chunk = chunk.to_vec();
            let resolver = self.clone();
            let semaphore = semaphore.clone();
            let len = chunk.len();

            let handle = tokio::spawn(async move {
                // 信号量不会被关闭
                let _permit = semaphore.acquire_owned().await.ok();
                tokio::task::spawn_blocking(move || resolver.resolve_all(chunk.as_slice())).await
            });
            tasks.push((handle, len));
        }

        let mut results = Vec::with_capacity(models.len());
        for (handle, len) in tasks {
            match handle.await {
                Ok(Ok(chunk_results)) => results.extend(chunk_results),
                Ok(Err(e)) | Err(e) => {
                    warn!("批量解析任务失败：{}", e);
                    results.extend(
                        (0..len).map(|_| Err(RsmError::AsyncTaskError(e.to_string()))),
                    );
                }
            }
        }
        results
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "未知 panic".to_string()
    }
}
