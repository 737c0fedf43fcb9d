//! Trade repository.
//!
//! Typed access to the `trades` table. Decimals and timestamps live as TEXT
//! in storage; this module owns the conversion in both directions.

use anyhow::{anyhow, Result};
use sqlx::sqlite::SqlitePool;

use crate::models::trade::{decode_decimal, decode_timestamp, encode_decimal, encode_timestamp};
use crate::models::{NewTrade, TradeRecord};

/// Row shape as stored: (id, commodity, quantity, price, trade_date, counterparty).
type TradeRow = (i64, String, String, String, String, String);

/// Repository for trade CRUD operations.
#[derive(Debug, Clone)]
pub struct TradeRepository {
    pool: SqlitePool,
}

impl TradeRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists all trades, most recent trade date first.
    ///
    /// # Errors
    /// Returns an error if the database query fails or a stored value
    /// cannot be decoded.
    pub async fn list(&self) -> Result<Vec<TradeRecord>> {
        let rows: Vec<TradeRow> = sqlx::query_as(
            r"
            SELECT id, commodity, quantity, price, trade_date, counterparty
            FROM trades
            ORDER BY trade_date DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_row).collect()
    }

    /// Gets a trade by id.
    ///
    /// # Errors
    /// Returns an error if the database query fails or a stored value
    /// cannot be decoded.
    pub async fn get(&self, id: i64) -> Result<Option<TradeRecord>> {
        let row: Option<TradeRow> = sqlx::query_as(
            r"
            SELECT id, commodity, quantity, price, trade_date, counterparty
            FROM trades
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_row).transpose()
    }

    /// Inserts a trade and returns the stored record with its assigned id.
    ///
    /// Reads the row back after the insert, so the returned record is
    /// exactly what a subsequent `get` will see.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn insert(&self, new: &NewTrade) -> Result<TradeRecord> {
        let result = sqlx::query(
            r"
            INSERT INTO trades (commodity, quantity, price, trade_date, counterparty)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(&new.commodity)
        .bind(encode_decimal(new.quantity))
        .bind(encode_decimal(new.price))
        .bind(encode_timestamp(new.trade_date))
        .bind(&new.counterparty)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, commodity = %new.commodity, "inserted trade");

        self.get(id)
            .await?
            .ok_or_else(|| anyhow!("trade {id} missing immediately after insert"))
    }

    /// Replaces the full row for `record.id` without reading it first.
    ///
    /// Returns `false` when the write matched no row, i.e. the row vanished
    /// before the update landed.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn update(&self, record: &TradeRecord) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE trades
            SET commodity = ?2, quantity = ?3, price = ?4, trade_date = ?5, counterparty = ?6
            WHERE id = ?1
            ",
        )
        .bind(record.id)
        .bind(&record.commodity)
        .bind(encode_decimal(record.quantity))
        .bind(encode_decimal(record.price))
        .bind(encode_timestamp(record.trade_date))
        .bind(&record.counterparty)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a trade by id. Returns `false` when no row matched.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM trades WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn decode_row(row: TradeRow) -> Result<TradeRecord> {
    let (id, commodity, quantity, price, trade_date, counterparty) = row;
    Ok(TradeRecord {
        id,
        commodity,
        quantity: decode_decimal(&quantity)?,
        price: decode_decimal(&price)?,
        trade_date: decode_timestamp(&trade_date)?,
        counterparty,
    })
}
