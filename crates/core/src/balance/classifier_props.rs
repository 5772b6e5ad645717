//! Property-based tests for balance classification.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::classifier::{AccountRow, classify};
use super::types::{AccountCategory, AccountKind};

/// Strategy to generate amounts in cents (negative amounts included:
/// contra accounts are legal line items).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy over the tag vocabulary, including tags with no maturity
/// bucket and tags with no recognized category at all.
fn tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ASSET_CIRCULANTE".to_string()),
        Just("ASSET_FIJO".to_string()),
        Just("ASSET_DIFERIDO".to_string()),
        Just("ASSET_UNKNOWN".to_string()),
        Just("LIABILITY_CIRCULANTE".to_string()),
        Just("LIABILITY_FIJO".to_string()),
        Just("LIABILITY_DIFERIDO".to_string()),
        Just("LIABILITY_OTHER".to_string()),
        Just("EQUITY_CIRCULANTE".to_string()),
        "[A-Z_]{0,16}",
    ]
}

fn rows() -> impl Strategy<Value = Vec<AccountRow>> {
    prop::collection::vec(
        (amount(), tag(), "[A-Za-z ]{1,12}").prop_map(|(amount, tag, name)| AccountRow {
            id: Uuid::new_v4(),
            name,
            amount,
            kind: AccountKind::parse(&tag),
        }),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* set of rows, equity equals assets minus liabilities,
    /// including the empty case.
    #[test]
    fn prop_equity_is_residual(rows in rows()) {
        let sheet = classify(&rows);
        prop_assert_eq!(sheet.equity, sheet.asset.total - sheet.liability.total);
    }

    /// *For any* set of rows, each category total equals the sum of the
    /// amounts of rows decoding to that category -- bucketed or not.
    #[test]
    fn prop_totals_cover_unbucketed_rows(rows in rows()) {
        let sheet = classify(&rows);

        let asset_sum: Decimal = rows
            .iter()
            .filter(|r| r.kind.as_ref().is_some_and(|k| k.category == AccountCategory::Asset))
            .map(|r| r.amount)
            .sum();
        let liability_sum: Decimal = rows
            .iter()
            .filter(|r| r.kind.as_ref().is_some_and(|k| k.category == AccountCategory::Liability))
            .map(|r| r.amount)
            .sum();

        prop_assert_eq!(sheet.asset.total, asset_sum);
        prop_assert_eq!(sheet.liability.total, liability_sum);
    }

    /// *For any* set of rows, bucket lists never hold more rows than were
    /// classified, and every listed row keeps its input amount.
    #[test]
    fn prop_bucket_lists_are_subset_of_input(rows in rows()) {
        let sheet = classify(&rows);
        let listed = sheet.asset.current.len()
            + sheet.asset.fixed.len()
            + sheet.asset.deferred.len()
            + sheet.liability.current.len()
            + sheet.liability.fixed.len()
            + sheet.liability.deferred.len();
        prop_assert!(listed <= rows.len());
    }

    /// Classification is deterministic: same rows, same sheet.
    #[test]
    fn prop_classify_is_deterministic(rows in rows()) {
        prop_assert_eq!(classify(&rows), classify(&rows));
    }
}
