use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rsmodelparser::{ConfigManager, ModelResolver, OutputFormat, into_rows, render, utils};

/// 未指定 --models 时使用的示例型号
const SAMPLE_MODELS: [&str; 5] = [
    "SV630PS2R8I",
    "SV630AT5R5I",
    "XY1A-220-05KW-F",
    "AC-M-2KW-1500-90",
    "ABC123",
];

#[derive(Debug, Parser)]
#[command(name = "rsmodelparser", version, about = "多规则型号解析器")]
struct Cli {
    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// 待解析的型号列表，空则使用默认示例
    #[arg(long, num_args = 1..)]
    models: Option<Vec<String>>,

    /// 声明式规则文件（JSON），按顺序追加在内置规则之后
    #[arg(long, num_args = 1..)]
    rules: Vec<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    utils::init_logger(cli.verbose);

    let config = ConfigManager::custom()
        .rule_files(cli.rules)
        .verbose(cli.verbose)
        .build();
    let resolver = ModelResolver::new(&config).context("规则加载失败")?;

    let models = cli
        .models
        .unwrap_or_else(|| SAMPLE_MODELS.iter().map(|m| m.to_string()).collect());

    let results = resolver.resolve_all(models.as_slice());
    let rows = into_rows(models.as_slice(), results);

    println!("{}", render(&rows, cli.format)?);
    Ok(())
}
