//! 全局配置管理,存储所有可配置项

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// 默认服务监听端口
pub const DEFAULT_PORT: u16 = 8000;

/// 批量解析并发数上限
pub const MAX_BATCH_WORKERS: usize = 1024;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 声明式规则文件（按顺序注册在内置规则之后）
    pub rule_files: Vec<PathBuf>,
    // 批量解析的并发工作数
    pub batch_workers: usize,
    // HTTP 服务监听地址
    pub server_addr: SocketAddr,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        let batch_workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
            .min(MAX_BATCH_WORKERS);

        Self {
            rule_files: Vec::new(),
            batch_workers,
            server_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn rule_file(mut self, path: PathBuf) -> Self {
        self.config.rule_files.push(path);
        self
    }

    pub fn rule_files(mut self, paths: Vec<PathBuf>) -> Self {
        self.config.rule_files = paths;
        self
    }

    /// 工作数限定在 [1, MAX_BATCH_WORKERS]
    pub fn batch_workers(mut self, workers: usize) -> Self {
        self.config.batch_workers = workers.clamp(1, MAX_BATCH_WORKERS);
        self
    }

    pub fn server_addr(mut self, addr: SocketAddr) -> Self {
        self.config.server_addr = addr;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.server_addr.set_port(port);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ConfigManager::custom()
            .rule_file(PathBuf::from("rules/a.json"))
            .rule_file(PathBuf::from("rules/b.json"))
            .batch_workers(0)
            .port(9100)
            .verbose(true)
            .build();

        assert_eq!(config.rule_files.len(), 2);
        // 0 会被修正为 1
        assert_eq!(config.batch_workers, 1);
        assert_eq!(config.server_addr.port(), 9100);
        assert!(config.verbose);
    }

    #[test]
    fn test_batch_workers_upper_bound() {
        let config = ConfigManager::custom().batch_workers(usize::MAX).build();
        assert_eq!(config.batch_workers, MAX_BATCH_WORKERS);
    }

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert!(config.rule_files.is_empty());
        assert!(config.batch_workers >= 1);
        assert_eq!(config.server_addr.port(), DEFAULT_PORT);
        assert!(!config.verbose);
    }
}
