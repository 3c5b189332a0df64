use actix_web::{get, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

/// Latest snapshot rows, newest first. This is the query shape the
/// dashboard consumes.
#[get("/snapshots")]
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
        .get_latest(&state.config.snapshot_table, limit)
        .await?;

    Ok(web::Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    limit: Option<i64>,
}
