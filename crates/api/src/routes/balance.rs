//! Balance sheet routes: account CRUD and the classified balance view.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, routes::error_response, routes::parse_amount};
use saldo_core::balance::{AccountKind, AccountRow, classify};
use saldo_db::repositories::ledger::{CreateAccountInput, LedgerRepository, UpdateAccountInput};
use saldo_shared::AppError;

/// Creates the balance routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/balance", delete(clear_balance))
        .route("/balance/accounts", post(create_account))
        .route("/balance/accounts/{id}", put(update_account))
        .route("/balance/accounts/{id}", delete(delete_account))
}

/// Query parameters selecting one company's balance.
#[derive(Debug, Deserialize)]
pub struct CompanyQuery {
    /// Company identifier.
    pub company: String,
}

/// Request body for creating a balance account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Owning company.
    pub company: String,
    /// Account name.
    pub name: String,
    /// Account amount, as a decimal string.
    pub amount: String,
    /// Compound account tag, e.g. `ASSET_CIRCULANTE`.
    #[serde(rename = "type")]
    pub account_type: String,
}

/// Request body for editing a balance account. Company is immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    /// Replacement name.
    pub name: String,
    /// Replacement amount, as a decimal string.
    pub amount: String,
    /// Replacement compound tag.
    #[serde(rename = "type")]
    pub account_type: String,
}

/// Validates the compound tag and amount of an incoming account payload.
fn validate_account_fields(
    amount: &str,
    account_type: &str,
) -> Result<(rust_decimal::Decimal, AccountKind), AppError> {
    let Some(kind) = AccountKind::parse(account_type) else {
        return Err(AppError::Validation(format!(
            "'{account_type}' is not a recognized account type; expected an ASSET_* or LIABILITY_* tag"
        )));
    };
    let amount = parse_amount("amount", amount)?;
    Ok((amount, kind))
}

/// POST `/balance/accounts` - Insert one balance account.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    let (amount, kind) = match validate_account_fields(&payload.amount, &payload.account_type) {
        Ok(decoded) => decoded,
        Err(e) => return error_response(&e),
    };

    let repo = LedgerRepository::new((*state.db).clone());
    let input = CreateAccountInput {
        company: payload.company,
        name: payload.name,
        amount,
        account_type: kind.as_str().to_string(),
    };

    match repo.create_account(input).await {
        Ok(account) => {
            info!(
                account_id = %account.id,
                company = %account.company,
                "Balance account created"
            );

            (
                StatusCode::CREATED,
                Json(json!({
                    "id": account.id,
                    "company": account.company,
                    "name": account.name,
                    "amount": account.amount.to_string(),
                    "type": account.account_type,
                    "created_at": account.created_at
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create balance account");
            error_response(&AppError::Storage("could not insert account".into()))
        }
    }
}

/// GET `/balance?company=X` - Classified balance sheet for one company.
async fn get_balance(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo.accounts_for_company(&query.company).await {
        Ok(accounts) => {
            let rows: Vec<AccountRow> = accounts
                .into_iter()
                .map(|a| AccountRow {
                    id: a.id,
                    name: a.name,
                    amount: a.amount,
                    kind: AccountKind::parse(&a.account_type),
                })
                .collect();

            (StatusCode::OK, Json(classify(&rows))).into_response()
        }
        Err(e) => {
            error!(error = %e, company = %query.company, "Failed to load balance accounts");
            error_response(&AppError::Storage("could not load accounts".into()))
        }
    }
}

/// PUT `/balance/accounts/{id}` - Replace the mutable fields of one account.
///
/// An absent id reports `updated: 0` and still succeeds.
async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAccountRequest>,
) -> impl IntoResponse {
    let (amount, kind) = match validate_account_fields(&payload.amount, &payload.account_type) {
        Ok(decoded) => decoded,
        Err(e) => return error_response(&e),
    };

    let repo = LedgerRepository::new((*state.db).clone());
    let input = UpdateAccountInput {
        name: payload.name,
        amount,
        account_type: kind.as_str().to_string(),
    };

    match repo.update_account(id, input).await {
        Ok(updated) => {
            info!(account_id = %id, updated, "Balance account updated");
            (StatusCode::OK, Json(json!({ "updated": updated }))).into_response()
        }
        Err(e) => {
            error!(error = %e, account_id = %id, "Failed to update balance account");
            error_response(&AppError::Storage("could not update account".into()))
        }
    }
}

/// DELETE `/balance/accounts/{id}` - Remove one account.
///
/// An absent id reports `deleted: 0` and still succeeds.
async fn delete_account(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo.delete_account(id).await {
        Ok(deleted) => {
            info!(account_id = %id, deleted, "Balance account deleted");
            (StatusCode::OK, Json(json!({ "deleted": deleted }))).into_response()
        }
        Err(e) => {
            error!(error = %e, account_id = %id, "Failed to delete balance account");
            error_response(&AppError::Storage("could not delete account".into()))
        }
    }
}

/// DELETE `/balance?company=X` - Remove every account of one company.
async fn clear_balance(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo.clear_company(&query.company).await {
        Ok(deleted) => {
            info!(company = %query.company, deleted, "Balance cleared");
            (StatusCode::OK, Json(json!({ "deleted": deleted }))).into_response()
        }
        Err(e) => {
            error!(error = %e, company = %query.company, "Failed to clear balance");
            error_response(&AppError::Storage("could not clear balance".into()))
        }
    }
}
