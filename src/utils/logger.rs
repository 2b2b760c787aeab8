//! 日志初始化
//! 日志统一写入 stderr，stdout 只保留解析结果

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 未设置 RUST_LOG 时的默认过滤规则
fn default_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "rsmodelparser=debug,tower_http=debug,info"
    } else {
        "rsmodelparser=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// 初始化全局日志订阅器；重复初始化时静默忽略
pub fn init_logger(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
