//! Data models for the trade ledger.

pub mod trade;

pub use trade::{NewTrade, TradeRecord};
