//! `library` server binary.
//!
//! # Responsibility
//! - Parse configuration from flags and environment.
//! - Initialize logging, open the catalog database, serve until Ctrl-C.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use library_api::ServerConfig;
use log::info;
use tokio::net::TcpListener;

/// Library catalog REST service (books, authors, categories)
#[derive(Parser, Debug)]
#[command(version = library_core::core_version(), about, long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.server;

    library_core::init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    info!(
        "event=app_start module=cli status=ok platform={} version={} database={}",
        std::env::consts::OS,
        library_core::core_version(),
        config.database.display()
    );

    let state = config
        .open_state()
        .with_context(|| format!("failed to open database {}", config.database.display()))?;
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;

    library_api::serve(listener, state)
        .await
        .context("server terminated with an error")
}
