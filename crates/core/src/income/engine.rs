//! Income statement computation.
//!
//! The formula chain is fixed and ordered; no step may be reordered and no
//! intermediate rounding is applied. Persisting the bottom line is the
//! caller's concern, keeping this function pure.

use rust_decimal::Decimal;

use super::types::{IncomeStatement, IncomeStatementInput};

/// Statutory income tax rate (ISR), 33%. Policy constant, not configuration.
#[must_use]
pub fn income_tax_rate() -> Decimal {
    Decimal::new(33, 2)
}

/// Mandatory profit sharing rate (PTU), 10%. Policy constant, not configuration.
#[must_use]
pub fn profit_sharing_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Derives the thirteen income statement fields from one input record.
#[must_use]
pub fn compute(input: &IncomeStatementInput) -> IncomeStatement {
    let net_sales = input.sales_total - (input.sales_returns + input.sales_discounts);
    let total_purchases = input.purchases + input.purchase_expenses;
    let net_purchases = total_purchases - (input.purchase_returns + input.purchase_discounts);
    let goods_available = input.opening_inventory + net_purchases;
    let cost_of_goods_sold = goods_available - input.closing_inventory;
    let gross_profit = net_sales - cost_of_goods_sold;
    let operating_income = gross_profit - (input.selling_expenses + input.admin_expenses);
    let net_financial = input.financial_income - input.financial_expenses;
    let net_other = input.other_income - input.other_expenses;
    let pretax_income = operating_income + net_financial + net_other;
    let income_tax = pretax_income * income_tax_rate();
    let profit_sharing = pretax_income * profit_sharing_rate();
    let net_income = pretax_income - (income_tax + profit_sharing);

    IncomeStatement {
        net_sales,
        total_purchases,
        net_purchases,
        goods_available,
        cost_of_goods_sold,
        gross_profit,
        operating_income,
        net_financial,
        net_other,
        pretax_income,
        income_tax,
        profit_sharing,
        net_income,
    }
}
