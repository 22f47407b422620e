//! HTTP surface of the library catalog.
//!
//! # Responsibility
//! - Map verbs and path parameters onto catalog service calls.
//! - Encode outcomes as JSON bodies and status codes.
//! - Own server configuration and the serve loop.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{build_app, serve, AppState};
