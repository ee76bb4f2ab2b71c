use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Business-rule violations found after a request deserialized cleanly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("item {item_id} has quantity {quantity}; quantities must be positive")]
    InvalidQuantity { item_id: String, quantity: i64 },

    #[error("payment method {0:?} is not accepted")]
    InvalidPaymentMethod(String),

    #[error("item {item_id} has price {price}; prices must be finite and non-negative")]
    InvalidPrice { item_id: String, price: f64 },

    #[error(
        "order total {} does not match item total {}",
        amount(.submitted),
        amount(.computed)
    )]
    TotalMismatch { submitted: f64, computed: f64 },

    #[error("table id {0} is not a positive integer")]
    InvalidTableId(i64),
}

/// Two decimals for whole-cent amounts, full precision otherwise, so a
/// sub-cent mismatch never prints as two equal totals.
fn amount(value: &f64) -> String {
    let cents = value * 100.0;
    if (cents - cents.round()).abs() < 1e-6 {
        format!("{value:.2}")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body or path, rejected before reaching any service.
    #[error("{message}")]
    Structural { status: StatusCode, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("payment declined: {0}")]
    PaymentDeclined(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Structural { status, .. } => *status,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PaymentDeclined(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Structural { .. } => "structural",
            AppError::Validation(_) => "validation",
            AppError::PaymentDeclined(_) => "payment_declined",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Structural {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Structural {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, kind = self.kind(), "request failed");
        } else {
            warn!(error = %self, kind = self.kind(), "request rejected");
        }

        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
