//! Property-based tests for the income statement engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::compute;
use super::types::IncomeStatementInput;

/// Strategy to generate signed amounts in cents. Negative values are valid
/// inputs (corrections, contra entries).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn input() -> impl Strategy<Value = IncomeStatementInput> {
    (
        (amount(), amount(), amount(), amount(), amount()),
        (amount(), amount(), amount(), amount(), amount()),
        (amount(), amount(), amount(), amount(), amount()),
    )
        .prop_map(|(a, b, c)| IncomeStatementInput {
            company: "propco".to_string(),
            sales_total: a.0,
            sales_returns: a.1,
            sales_discounts: a.2,
            opening_inventory: a.3,
            purchases: a.4,
            purchase_expenses: b.0,
            purchase_returns: b.1,
            purchase_discounts: b.2,
            closing_inventory: b.3,
            selling_expenses: b.4,
            admin_expenses: c.0,
            financial_income: c.1,
            financial_expenses: c.2,
            other_income: c.3,
            other_expenses: c.4,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Identical input yields identical thirteen-field output.
    #[test]
    fn prop_compute_is_deterministic(input in input()) {
        prop_assert_eq!(compute(&input), compute(&input));
    }

    /// Cost of goods sold collapses to the flat expression
    /// `opening + (purchases + expenses - returns - discounts) - closing`.
    #[test]
    fn prop_cogs_chain_identity(input in input()) {
        let result = compute(&input);
        let flat = input.opening_inventory
            + (input.purchases + input.purchase_expenses
                - input.purchase_returns
                - input.purchase_discounts)
            - input.closing_inventory;
        prop_assert_eq!(result.cost_of_goods_sold, flat);
    }

    /// Net income is pretax income less both levies, and the levies are
    /// exactly 33% and 10% of pretax income.
    #[test]
    fn prop_net_income_identity(input in input()) {
        let result = compute(&input);
        prop_assert_eq!(result.income_tax, result.pretax_income * Decimal::new(33, 2));
        prop_assert_eq!(result.profit_sharing, result.pretax_income * Decimal::new(10, 2));
        prop_assert_eq!(
            result.net_income,
            result.pretax_income - (result.income_tax + result.profit_sharing)
        );
    }

    /// Pretax income aggregates the three intermediate results.
    #[test]
    fn prop_pretax_aggregation(input in input()) {
        let result = compute(&input);
        prop_assert_eq!(
            result.pretax_income,
            result.operating_income + result.net_financial + result.net_other
        );
    }
}
