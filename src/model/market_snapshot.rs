use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::BigDecimal, FromRow};

/// One market reading for one asset. A full row set produced by a single
/// extraction shares one `extracted_at` value.
#[derive(Debug, FromRow, Deserialize, Serialize)]
pub struct MarketSnapshot {
    pub asset_id: String,
    pub price: BigDecimal,
    pub market_cap: BigDecimal,
    pub volume: BigDecimal,
    pub extracted_at: DateTime<Utc>,
}
