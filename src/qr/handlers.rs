use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use bytes::Bytes;
use tracing::{debug, instrument};

use super::services::generate_qr;
use crate::{error::AppError, state::AppState};

pub fn qr_routes() -> Router<AppState> {
    Router::new().route("/qr/:table_id", get(get_table_qr))
}

/// GET /qr/:table_id: PNG QR code linking to the table's ordering page.
#[instrument(skip(state, table_id))]
pub async fn get_table_qr(
    State(state): State<AppState>,
    table_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(table_id) = table_id?;
    let png = generate_qr(&state.config.qr.base_url, table_id)?;
    debug!(table_id, bytes = png.len(), "qr generated");
    Ok(([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)))
}
