//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::AppState;
use saldo_shared::AppError;

pub mod balance;
pub mod companies;
pub mod health;
pub mod income;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(balance::routes())
        .merge(income::routes())
        .merge(companies::routes())
}

/// Maps an [`AppError`] to a JSON error response.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Parses a decimal amount from its wire representation.
///
/// Amounts travel as JSON strings so no float ever enters the pipeline.
pub(crate) fn parse_amount(field: &str, value: &str) -> Result<Decimal, AppError> {
    value
        .parse::<Decimal>()
        .map_err(|_| AppError::Validation(format!("'{field}' is not a valid decimal amount")))
}
