//! Balance sheet classification.
//!
//! Pure function over rows already filtered to one company by the storage
//! layer. Bucket lists follow input order; no sorting is applied.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::types::{
    AccountCategory, AccountKind, BalanceItem, BalanceSection, BalanceSheet, MaturityBucket,
};

/// One ledger row as handed to the classifier.
///
/// `kind` is `None` for stored tags that decode to no category (possible
/// for rows written before tag validation existed); such rows are skipped
/// entirely.
#[derive(Debug, Clone)]
pub struct AccountRow {
    /// Ledger account id.
    pub id: Uuid,
    /// Account name.
    pub name: String,
    /// Account amount.
    pub amount: Decimal,
    /// Decoded account tag.
    pub kind: Option<AccountKind>,
}

impl BalanceSection {
    fn push(&mut self, bucket: Option<MaturityBucket>, item: BalanceItem) {
        // Every row counts toward the total; only bucketed rows are listed.
        self.total += item.amount;
        match bucket {
            Some(MaturityBucket::Current) => self.current.push(item),
            Some(MaturityBucket::Fixed) => self.fixed.push(item),
            Some(MaturityBucket::Deferred) => self.deferred.push(item),
            None => {}
        }
    }
}

/// Classifies ledger rows into a structured balance sheet.
///
/// Rows without a decoded kind contribute nothing; rows with a category but
/// no maturity bucket contribute to the category total only. Finally,
/// `equity = asset.total - liability.total`.
#[must_use]
pub fn classify(rows: &[AccountRow]) -> BalanceSheet {
    let mut sheet = BalanceSheet::default();

    for row in rows {
        let Some(kind) = &row.kind else {
            continue;
        };

        let item = BalanceItem {
            id: row.id,
            name: row.name.clone(),
            amount: row.amount,
        };

        match kind.category {
            AccountCategory::Asset => sheet.asset.push(kind.bucket, item),
            AccountCategory::Liability => sheet.liability.push(kind.bucket, item),
        }
    }

    sheet.equity = sheet.asset.total - sheet.liability.total;
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(name: &str, amount: Decimal, tag: &str) -> AccountRow {
        AccountRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            amount,
            kind: AccountKind::parse(tag),
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let sheet = classify(&[]);
        assert_eq!(sheet, BalanceSheet::default());
        assert_eq!(sheet.equity, Decimal::ZERO);
    }

    #[test]
    fn test_current_asset_is_listed_and_totaled() {
        let sheet = classify(&[row("Cash", dec!(100.50), "ASSET_CIRCULANTE")]);
        assert_eq!(sheet.asset.current.len(), 1);
        assert_eq!(sheet.asset.current[0].name, "Cash");
        assert_eq!(sheet.asset.current[0].amount, dec!(100.50));
        assert_eq!(sheet.asset.total, dec!(100.50));
        assert_eq!(sheet.equity, dec!(100.50));
    }

    #[test]
    fn test_unmatched_bucket_counts_in_total_only() {
        let sheet = classify(&[row("Goodwill", dec!(250), "ASSET_UNKNOWN")]);
        assert_eq!(sheet.asset.total, dec!(250));
        assert!(sheet.asset.current.is_empty());
        assert!(sheet.asset.fixed.is_empty());
        assert!(sheet.asset.deferred.is_empty());
    }

    #[test]
    fn test_unrecognized_category_is_ignored() {
        let sheet = classify(&[
            row("Cash", dec!(100), "ASSET_CIRCULANTE"),
            row("Mystery", dec!(9999), "EQUITY_CIRCULANTE"),
        ]);
        assert_eq!(sheet.asset.total, dec!(100));
        assert_eq!(sheet.liability.total, Decimal::ZERO);
        assert_eq!(sheet.equity, dec!(100));
    }

    #[test]
    fn test_equity_is_residual() {
        let sheet = classify(&[
            row("Cash", dec!(1000), "ASSET_CIRCULANTE"),
            row("Machinery", dec!(5000), "ASSET_FIJO"),
            row("Loans", dec!(2500), "LIABILITY_FIJO"),
            row("Payables", dec!(300), "LIABILITY_CIRCULANTE"),
        ]);
        assert_eq!(sheet.asset.total, dec!(6000));
        assert_eq!(sheet.liability.total, dec!(2800));
        assert_eq!(sheet.equity, dec!(3200));
        assert_eq!(sheet.liability.fixed[0].name, "Loans");
        assert_eq!(sheet.liability.current[0].name, "Payables");
    }

    #[test]
    fn test_bucket_lists_preserve_input_order() {
        let sheet = classify(&[
            row("First", dec!(1), "ASSET_CIRCULANTE"),
            row("Second", dec!(2), "ASSET_CIRCULANTE"),
            row("Third", dec!(3), "ASSET_CIRCULANTE"),
        ]);
        let names: Vec<_> = sheet.asset.current.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_negative_amounts_flow_through() {
        let sheet = classify(&[
            row("Overdraft", dec!(-400), "ASSET_CIRCULANTE"),
            row("Payables", dec!(100), "LIABILITY_CIRCULANTE"),
        ]);
        assert_eq!(sheet.asset.total, dec!(-400));
        assert_eq!(sheet.equity, dec!(-500));
    }
}
