//! Destiny Matrix daemon library
//!
//! This module provides the components of `destinyd`:
//! - REST API over the correlation engine
//! - Layered configuration
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::{DaemonConfig, LoggingConfig, ServerConfig};
pub use error::{ApiError, DaemonError, DaemonResult};
pub use server::Server;
