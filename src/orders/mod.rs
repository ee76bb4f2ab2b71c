pub mod dto;
mod handlers;
pub mod payment;
pub mod services;
pub mod sink;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::order_routes())
}
