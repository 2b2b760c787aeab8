use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use rsmodelparser::config::DEFAULT_PORT;
use rsmodelparser::server::Server;
use rsmodelparser::{ConfigManager, utils};

#[derive(Debug, Parser)]
#[command(name = "rsmodelparser-server", version, about = "型号解析 HTTP 服务")]
struct Args {
    /// 监听地址
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// 监听端口
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// 批量解析并发数（默认取 CPU 核数）
    #[arg(long)]
    workers: Option<usize>,

    /// 声明式规则文件（JSON）
    #[arg(long, num_args = 1..)]
    rules: Vec<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.verbose);

    let mut builder = ConfigManager::custom()
        .server_addr((args.host, args.port).into())
        .rule_files(args.rules)
        .verbose(args.verbose);
    if let Some(workers) = args.workers {
        builder = builder.batch_workers(workers);
    }

    Server::builder().config(builder.build()).build()?.run().await
}
