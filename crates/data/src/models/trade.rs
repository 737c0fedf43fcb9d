//! Commodity trade data model.
//!
//! Uses `rust_decimal::Decimal` for quantities and prices so values
//! round-trip without floating-point surprises. All timestamps are UTC.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single commodity trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Storage-assigned identifier, immutable and never reused.
    pub id: i64,
    /// Traded instrument (e.g. "Gold", "Crude Oil"). Required, non-empty.
    pub commodity: String,
    /// Amount traded.
    pub quantity: Decimal,
    /// Price per unit.
    pub price: Decimal,
    /// When the trade occurred.
    pub trade_date: DateTime<Utc>,
    /// The entity on the other side of the trade.
    pub counterparty: String,
}

/// A trade as submitted for insertion, before an id exists.
#[derive(Debug, Clone)]
pub struct NewTrade {
    pub commodity: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub trade_date: DateTime<Utc>,
    pub counterparty: String,
}

impl TradeRecord {
    /// Total value of the trade.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.quantity * self.price
    }
}

/// Formats a timestamp for storage.
///
/// Fixed-width RFC3339 (microseconds, `Z` suffix) so the TEXT column sorts
/// chronologically under plain lexicographic ORDER BY.
pub(crate) fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid trade_date in storage: {raw}"))?;
    Ok(parsed.with_timezone(&Utc))
}

pub(crate) fn encode_decimal(value: Decimal) -> String {
    value.to_string()
}

pub(crate) fn decode_decimal(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw).with_context(|| format!("invalid decimal in storage: {raw}"))
}
