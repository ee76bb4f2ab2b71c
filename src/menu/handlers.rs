use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use super::dto::MenuItem;
use crate::state::AppState;

pub fn menu_routes() -> Router<AppState> {
    Router::new().route("/menu", get(get_menu))
}

/// GET /menu: the full catalog, no filtering or paging.
#[instrument(skip(state))]
pub async fn get_menu(State(state): State<AppState>) -> Json<Arc<[MenuItem]>> {
    debug!(items = state.catalog.len(), "serving menu");
    Json(state.catalog.shared())
}
