//! Core configuration for the trade ledger service.

pub mod config;
pub mod config_loader;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use config_loader::ConfigLoader;
