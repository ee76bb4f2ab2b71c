pub mod catalog;
pub mod dto;
mod handlers;

use crate::state::AppState;
use axum::Router;

pub use catalog::Catalog;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::menu_routes())
}
