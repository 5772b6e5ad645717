//! Income statement records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed financial inputs for one income statement computation.
///
/// Immutable and single-use; the company tags the persisted bottom line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementInput {
    /// Company the statement belongs to.
    pub company: String,
    /// Gross sales for the period.
    pub sales_total: Decimal,
    /// Sales returns.
    pub sales_returns: Decimal,
    /// Sales discounts.
    pub sales_discounts: Decimal,
    /// Inventory at the start of the period.
    pub opening_inventory: Decimal,
    /// Purchases during the period.
    pub purchases: Decimal,
    /// Freight and other expenses on purchases.
    pub purchase_expenses: Decimal,
    /// Purchase returns.
    pub purchase_returns: Decimal,
    /// Purchase discounts.
    pub purchase_discounts: Decimal,
    /// Inventory at the end of the period.
    pub closing_inventory: Decimal,
    /// Selling expenses.
    pub selling_expenses: Decimal,
    /// Administrative expenses.
    pub admin_expenses: Decimal,
    /// Financial income.
    pub financial_income: Decimal,
    /// Financial expenses.
    pub financial_expenses: Decimal,
    /// Other (non-operating) income.
    pub other_income: Decimal,
    /// Other (non-operating) expenses.
    pub other_expenses: Decimal,
}

/// The thirteen derived fields of an income statement.
///
/// Only `net_income` is ever persisted; the full record is a response view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Sales net of returns and discounts.
    pub net_sales: Decimal,
    /// Purchases plus purchase expenses.
    pub total_purchases: Decimal,
    /// Total purchases net of returns and discounts.
    pub net_purchases: Decimal,
    /// Opening inventory plus net purchases.
    pub goods_available: Decimal,
    /// Goods available minus closing inventory.
    pub cost_of_goods_sold: Decimal,
    /// Net sales minus cost of goods sold.
    pub gross_profit: Decimal,
    /// Gross profit minus selling and administrative expenses.
    pub operating_income: Decimal,
    /// Financial income minus financial expenses.
    pub net_financial: Decimal,
    /// Other income minus other expenses.
    pub net_other: Decimal,
    /// Operating income plus net financial and other results.
    pub pretax_income: Decimal,
    /// Income tax at the statutory rate.
    pub income_tax: Decimal,
    /// Mandatory profit sharing.
    pub profit_sharing: Decimal,
    /// Bottom line after taxes and profit sharing.
    pub net_income: Decimal,
}
