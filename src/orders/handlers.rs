use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{Confirmation, Order},
    services::accept_order,
};
use crate::{error::AppError, state::AppState};

pub fn order_routes() -> Router<AppState> {
    Router::new().route("/order", post(create_order))
}

#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<Json<Confirmation>, AppError> {
    let Json(order) = payload?;
    let confirmation = accept_order(&state, order).await?;
    Ok(Json(confirmation))
}
