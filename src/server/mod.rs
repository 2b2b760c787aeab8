//! HTTP 服务：单条/批量解析与健康检查
//!
//! ```no_run
//! use rsmodelparser::{ConfigManager, server::Server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigManager::custom().port(8000).build();
//!     Server::builder().config(config).build()?.run().await
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod router;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{GlobalConfig, MAX_BATCH_WORKERS};
use crate::resolver::ModelResolver;

/// 接口共享状态
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: ModelResolver,
    pub batch_workers: usize,
}

impl AppState {
    pub fn new(resolver: ModelResolver, batch_workers: usize) -> Self {
        Self {
            resolver,
            batch_workers: batch_workers.clamp(1, MAX_BATCH_WORKERS),
        }
    }
}

/// 服务构建器
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: GlobalConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: GlobalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// 加载规则并构建服务；规则文件无效时返回错误
    pub fn build(self) -> Result<Server> {
        let resolver = ModelResolver::new(&self.cfg).context("规则加载失败")?;
        let state = AppState::new(resolver, self.cfg.batch_workers);
        Ok(Server { cfg: self.cfg, state })
    }
}

/// 已初始化、可运行的服务
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    cfg: GlobalConfig,
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// 启动服务，直到收到 Ctrl-C
    pub async fn run(self) -> Result<()> {
        let address = self.cfg.server_addr;
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("监听地址 {} 绑定失败", address))?;

        info!(address = %address, rules = ?self.state.resolver.registry().keys(), "型号解析服务启动");

        axum::serve(listener, router::init(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务异常退出")?;

        info!("型号解析服务已停止");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听退出信号失败：{}", e);
    }
}
