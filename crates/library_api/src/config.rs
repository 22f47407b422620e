//! Server configuration.
//!
//! Every setting is a CLI flag with an environment fallback, e.g.
//! `--database` / `LIBRARY_DB_PATH`.

use clap::Args;
use library_core::db::{open_db, DbResult};
use library_core::CatalogService;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::server::AppState;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8030";
pub const DEFAULT_DB_FILE: &str = "library.sqlite3";

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "LIBRARY_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: SocketAddr,

    /// SQLite database file (created when missing)
    #[arg(long, env = "LIBRARY_DB_PATH", default_value = DEFAULT_DB_FILE)]
    pub database: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "LIBRARY_LOG_LEVEL", default_value = library_core::default_log_level())]
    pub log_level: String,

    /// Absolute directory for rotating log files (stderr when omitted)
    #[arg(long, env = "LIBRARY_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Opens the configured database and wraps it as shared router state.
    pub fn open_state(&self) -> DbResult<AppState> {
        let conn = open_db(&self.database)?;
        Ok(AppState::new(CatalogService::from_connection(conn)))
    }
}
