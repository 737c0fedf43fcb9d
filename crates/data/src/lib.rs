//! Persistence mapping for commodity trade records.
//!
//! This crate provides:
//! - A `SQLite` database handle with embedded schema migrations and seeding
//! - The `TradeRecord` data model
//! - A typed repository over the `trades` table

pub mod database;
pub mod models;
pub mod repositories;

pub use database::Database;
pub use models::{NewTrade, TradeRecord};
pub use repositories::TradeRepository;
