//! Income statement routes: computation endpoint and history listing.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, routes::error_response, routes::parse_amount};
use saldo_core::income::{IncomeStatement, IncomeStatementInput, compute};
use saldo_db::repositories::history::HistoryRepository;
use saldo_shared::{AppError, AppResult};

use super::balance::CompanyQuery;

/// Creates the income statement routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/income-statement", post(compute_income_statement))
        .route("/income-statement/history", get(income_history))
}

/// Request body for one income statement computation.
///
/// All amounts are decimal strings; every field is required.
#[derive(Debug, Deserialize)]
pub struct IncomeStatementRequest {
    /// Company the statement belongs to.
    pub company: String,
    /// Gross sales for the period.
    pub sales_total: String,
    /// Sales returns.
    pub sales_returns: String,
    /// Sales discounts.
    pub sales_discounts: String,
    /// Inventory at the start of the period.
    pub opening_inventory: String,
    /// Purchases during the period.
    pub purchases: String,
    /// Freight and other expenses on purchases.
    pub purchase_expenses: String,
    /// Purchase returns.
    pub purchase_returns: String,
    /// Purchase discounts.
    pub purchase_discounts: String,
    /// Inventory at the end of the period.
    pub closing_inventory: String,
    /// Selling expenses.
    pub selling_expenses: String,
    /// Administrative expenses.
    pub admin_expenses: String,
    /// Financial income.
    pub financial_income: String,
    /// Financial expenses.
    pub financial_expenses: String,
    /// Other (non-operating) income.
    pub other_income: String,
    /// Other (non-operating) expenses.
    pub other_expenses: String,
}

impl IncomeStatementRequest {
    /// Parses every wire amount into the immutable computation input.
    fn into_input(self) -> AppResult<IncomeStatementInput> {
        Ok(IncomeStatementInput {
            company: self.company,
            sales_total: parse_amount("sales_total", &self.sales_total)?,
            sales_returns: parse_amount("sales_returns", &self.sales_returns)?,
            sales_discounts: parse_amount("sales_discounts", &self.sales_discounts)?,
            opening_inventory: parse_amount("opening_inventory", &self.opening_inventory)?,
            purchases: parse_amount("purchases", &self.purchases)?,
            purchase_expenses: parse_amount("purchase_expenses", &self.purchase_expenses)?,
            purchase_returns: parse_amount("purchase_returns", &self.purchase_returns)?,
            purchase_discounts: parse_amount("purchase_discounts", &self.purchase_discounts)?,
            closing_inventory: parse_amount("closing_inventory", &self.closing_inventory)?,
            selling_expenses: parse_amount("selling_expenses", &self.selling_expenses)?,
            admin_expenses: parse_amount("admin_expenses", &self.admin_expenses)?,
            financial_income: parse_amount("financial_income", &self.financial_income)?,
            financial_expenses: parse_amount("financial_expenses", &self.financial_expenses)?,
            other_income: parse_amount("other_income", &self.other_income)?,
            other_expenses: parse_amount("other_expenses", &self.other_expenses)?,
        })
    }
}

/// Response carrying the thirteen derived fields, amounts as strings.
#[derive(Debug, Serialize)]
pub struct IncomeStatementResponse {
    /// Company the statement belongs to.
    pub company: String,
    /// Sales net of returns and discounts.
    pub net_sales: String,
    /// Purchases plus purchase expenses.
    pub total_purchases: String,
    /// Total purchases net of returns and discounts.
    pub net_purchases: String,
    /// Opening inventory plus net purchases.
    pub goods_available: String,
    /// Goods available minus closing inventory.
    pub cost_of_goods_sold: String,
    /// Net sales minus cost of goods sold.
    pub gross_profit: String,
    /// Gross profit minus selling and administrative expenses.
    pub operating_income: String,
    /// Financial income minus financial expenses.
    pub net_financial: String,
    /// Other income minus other expenses.
    pub net_other: String,
    /// Operating income plus net financial and other results.
    pub pretax_income: String,
    /// Income tax at the statutory rate.
    pub income_tax: String,
    /// Mandatory profit sharing.
    pub profit_sharing: String,
    /// Bottom line after taxes and profit sharing.
    pub net_income: String,
}

impl IncomeStatementResponse {
    fn new(company: String, result: &IncomeStatement) -> Self {
        Self {
            company,
            net_sales: result.net_sales.to_string(),
            total_purchases: result.total_purchases.to_string(),
            net_purchases: result.net_purchases.to_string(),
            goods_available: result.goods_available.to_string(),
            cost_of_goods_sold: result.cost_of_goods_sold.to_string(),
            gross_profit: result.gross_profit.to_string(),
            operating_income: result.operating_income.to_string(),
            net_financial: result.net_financial.to_string(),
            net_other: result.net_other.to_string(),
            pretax_income: result.pretax_income.to_string(),
            income_tax: result.income_tax.to_string(),
            profit_sharing: result.profit_sharing.to_string(),
            net_income: result.net_income.to_string(),
        }
    }
}

/// POST `/income-statement` - Derive the statement and log the bottom line.
///
/// The computation itself cannot fail; only the history append can. A
/// failed append surfaces as a storage error and never masquerades as a
/// computation problem.
async fn compute_income_statement(
    State(state): State<AppState>,
    Json(payload): Json<IncomeStatementRequest>,
) -> impl IntoResponse {
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(e) => return error_response(&e),
    };

    let result = compute(&input);

    let repo = HistoryRepository::new((*state.db).clone());
    match repo.append(&input.company, result.net_income).await {
        Ok(row) => {
            info!(
                company = %row.company,
                net_income = %row.net_income,
                "Income statement computed and logged"
            );

            (
                StatusCode::OK,
                Json(IncomeStatementResponse::new(input.company, &result)),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, company = %input.company, "Failed to append income history");
            error_response(&AppError::Storage("could not record net income".into()))
        }
    }
}

/// GET `/income-statement/history?company=X` - Net income log, newest first.
async fn income_history(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> impl IntoResponse {
    let repo = HistoryRepository::new((*state.db).clone());

    match repo.history_for_company(&query.company).await {
        Ok(rows) => {
            let history: Vec<_> = rows
                .into_iter()
                .map(|r| {
                    json!({
                        "id": r.id,
                        "recorded_at": r.recorded_at,
                        "net_income": r.net_income.to_string()
                    })
                })
                .collect();

            (StatusCode::OK, Json(json!({ "history": history }))).into_response()
        }
        Err(e) => {
            error!(error = %e, company = %query.company, "Failed to load income history");
            error_response(&AppError::Storage("could not load history".into()))
        }
    }
}
