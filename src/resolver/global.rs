//! 全局解析器单例管理
//! 进程内仅构建一次注册表，之后只读共享

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::resolver::ModelResolver;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{RsmError, RsmResult};
use crate::rule::FieldMap;

/// 全局解析器实例
static GLOBAL_RESOLVER: OnceCell<ModelResolver> = OnceCell::new();

/// 初始化全局解析器（默认配置）
pub fn init_global_resolver() -> RsmResult<()> {
    init_global_resolver_with_config(&ConfigManager::get_default())
}

/// 带自定义配置初始化全局解析器
///
/// 幂等：已初始化时直接返回 Ok(())，不会重新加载规则。
pub fn init_global_resolver_with_config(config: &GlobalConfig) -> RsmResult<()> {
    if GLOBAL_RESOLVER.get().is_some() {
        debug!("全局解析器已初始化，跳过");
        return Ok(());
    }

    let resolver = ModelResolver::new(config)
        .map_err(|e| RsmError::ResolverInitError(e.to_string()))?;

    // 并发初始化时以先完成者为准
    if GLOBAL_RESOLVER.set(resolver).is_err() {
        debug!("全局解析器已由其他线程初始化");
        return Ok(());
    }

    info!("全局解析器初始化完成");
    Ok(())
}

/// 获取全局解析器（未初始化时以默认配置懒加载）
pub fn get_global_resolver() -> RsmResult<&'static ModelResolver> {
    GLOBAL_RESOLVER.get_or_try_init(|| {
        debug!("懒加载全局解析器（默认配置）");
        ModelResolver::new(&ConfigManager::get_default())
            .map_err(|e| RsmError::ResolverInitError(e.to_string()))
    })
}

/// 解析单个型号（全局解析器）
pub fn parse_model(model: &str) -> RsmResult<FieldMap> {
    get_global_resolver()?.resolve(model)
}

/// 批量解析型号（全局解析器）
pub fn parse_models<S: AsRef<str>>(models: &[S]) -> RsmResult<Vec<RsmResult<FieldMap>>> {
    Ok(get_global_resolver()?.resolve_all(models))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_global_resolver() {
        // 多次初始化均成功且指向同一实例
        init_global_resolver().unwrap();
        init_global_resolver().unwrap();
        let a = get_global_resolver().unwrap() as *const ModelResolver;
        let b = get_global_resolver().unwrap() as *const ModelResolver;
        assert_eq!(a, b);

        let result = parse_model("XY1B-380-10KW").unwrap();
        assert_eq!(result.get("类型"), Some("总线"));

        let batch = parse_models(&["TX-PT-10K-V1", "ABC123"]).unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch[1].as_ref().unwrap().is_unrecognized());
    }
}
