//! Database repositories for the trade ledger.

pub mod trade_repo;

pub use trade_repo::TradeRepository;
