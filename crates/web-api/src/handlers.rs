use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use trade_ledger_data::{NewTrade, TradeRecord, TradeRepository};

/// Trade fields as submitted by a client.
///
/// `id` is ignored on create and must match the path on update. Only
/// `commodity` is required; quantity and price default to zero and
/// counterparty to empty, mirroring the storage schema where every column
/// is non-null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub commodity: Option<String>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub trade_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub counterparty: String,
}

impl TradePayload {
    /// The commodity, if present and non-empty.
    fn commodity(&self) -> Option<&str> {
        self.commodity.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Lists all trades, most recent trade date first.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the storage read fails.
pub async fn list_trades(
    State(repo): State<TradeRepository>,
) -> Result<Json<Vec<TradeRecord>>, StatusCode> {
    let trades = repo.list().await.map_err(internal_error)?;
    Ok(Json(trades))
}

/// Gets a single trade by id.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if no trade has that id, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the storage read fails.
pub async fn get_trade(
    State(repo): State<TradeRepository>,
    Path(id): Path<i64>,
) -> Result<Json<TradeRecord>, StatusCode> {
    let trade = repo
        .get(id)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(trade))
}

/// Creates a trade. A missing `tradeDate` is defaulted to the current UTC
/// time; any client-supplied `id` is ignored.
///
/// Responds 201 with the stored record and a `Location` header pointing at
/// the new resource.
///
/// # Errors
/// Returns `StatusCode::BAD_REQUEST` if `commodity` is missing or empty, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the insert fails.
pub async fn create_trade(
    State(repo): State<TradeRepository>,
    Json(payload): Json<TradePayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TradeRecord>), StatusCode> {
    let commodity = payload.commodity().ok_or(StatusCode::BAD_REQUEST)?.to_string();

    let new = NewTrade {
        commodity,
        quantity: payload.quantity,
        price: payload.price,
        trade_date: payload.trade_date.unwrap_or_else(Utc::now),
        counterparty: payload.counterparty,
    };

    let created = repo.insert(&new).await.map_err(internal_error)?;
    let location = format!("/api/trades/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replaces the trade at `id` with the submitted payload.
///
/// The write goes straight to storage without a prior read; a write that
/// matches no row means the trade vanished in the meantime and yields 404.
///
/// # Errors
/// Returns `StatusCode::BAD_REQUEST` if the body id does not equal the path
/// id or `commodity` is missing, `StatusCode::NOT_FOUND` if the row no
/// longer exists, or `StatusCode::INTERNAL_SERVER_ERROR` on storage failure.
pub async fn update_trade(
    State(repo): State<TradeRepository>,
    Path(id): Path<i64>,
    Json(payload): Json<TradePayload>,
) -> Result<StatusCode, StatusCode> {
    if payload.id != Some(id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let commodity = payload.commodity().ok_or(StatusCode::BAD_REQUEST)?.to_string();

    let record = TradeRecord {
        id,
        commodity,
        quantity: payload.quantity,
        price: payload.price,
        trade_date: payload.trade_date.unwrap_or_else(Utc::now),
        counterparty: payload.counterparty,
    };

    if repo.update(&record).await.map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// Deletes a trade by id.
///
/// # Errors
/// Returns `StatusCode::NOT_FOUND` if no trade has that id, or
/// `StatusCode::INTERNAL_SERVER_ERROR` if the delete fails.
pub async fn delete_trade(
    State(repo): State<TradeRepository>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    if repo.delete(id).await.map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

fn internal_error(err: anyhow::Error) -> StatusCode {
    tracing::error!("storage failure: {err:#}");
    StatusCode::INTERNAL_SERVER_ERROR
}
