use anyhow::Context;
use chub::domain::config::ApiConfig;
use chub::kernel::config::load_config;
use chub_logger::{LevelFilter, Logger};
use chub_server::Server;
use clap::Parser;
use std::path::PathBuf;

/// Income Insurance Claims API server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file; the extension may be omitted.
    #[arg(short, long, default_value = "server")]
    config: PathBuf,

    /// Overrides `server.port`.
    #[arg(short, long)]
    port: Option<u16>,
}

#[chub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg: ApiConfig =
        load_config(Some(&args.config)).context("Critical: Configuration is malformed")?;

    let level: LevelFilter = cfg
        .logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level `{}`", cfg.logging.level))?;

    let mut logger =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).json(cfg.logging.json);
    if let Some(directory) = &cfg.logging.directory {
        logger = logger.directory(directory);
    }
    let _log = logger.init()?;

    let mut server = Server::builder().config(cfg);
    if let Some(port) = args.port {
        server = server.port(port);
    }

    server.build().await?.run().await
}
