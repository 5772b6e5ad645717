//! Company listing route.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::{AppState, routes::error_response};
use saldo_db::{HistoryRepository, LedgerRepository, merge_companies};
use saldo_shared::AppError;

/// Creates the company routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/companies", get(list_companies))
}

/// GET `/companies` - Distinct companies across both stores.
///
/// A company appears exactly once even when present in both the ledger
/// and the income history.
async fn list_companies(State(state): State<AppState>) -> impl IntoResponse {
    let ledger = LedgerRepository::new((*state.db).clone());
    let history = HistoryRepository::new((*state.db).clone());

    let from_ledger = match ledger.companies().await {
        Ok(companies) => companies,
        Err(e) => {
            error!(error = %e, "Failed to list ledger companies");
            return error_response(&AppError::Storage("could not list companies".into()));
        }
    };

    let from_history = match history.companies().await {
        Ok(companies) => companies,
        Err(e) => {
            error!(error = %e, "Failed to list history companies");
            return error_response(&AppError::Storage("could not list companies".into()));
        }
    };

    (
        StatusCode::OK,
        Json(json!({ "companies": merge_companies(from_ledger, from_history) })),
    )
        .into_response()
}
