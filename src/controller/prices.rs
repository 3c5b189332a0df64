use std::str::FromStr;

use actix_web::{get, web, Responder, Result};
use anyhow::Context;
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

/// Price series for one asset as `(epoch_ms, price)` pairs, newest first.
#[get("/prices")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let mut limit = data.limit.unwrap_or(100);

    if limit > 1000 {
        limit = 1000;
    }

    let rows = state
        .database
        .market_snapshot
        .get_price_series(&state.config.snapshot_table, &data.asset, limit)
        .await?;

    let mut prices = vec![];

    for (date, price) in rows.into_iter() {
        let ms = date.timestamp_millis();
        let str_price = price.to_string();
        let p = f64::from_str(&str_price)
            .context("could not parse big decimal to float")?;
        prices.push((ms, p));
    }

    Ok(web::Json(prices))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    asset: String,
    limit: Option<i64>,
}
