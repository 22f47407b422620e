//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into async, request-scoped APIs.
//! - Keep the HTTP layer decoupled from SQLite details.

pub mod catalog_service;
