//! Balance sheet taxonomy and classification.
//!
//! This module implements the balance sheet side of the service:
//! - Account taxonomy types (category and maturity bucket)
//! - Classification of ledger rows into a structured balance sheet
//! - Equity as the residual of assets over liabilities

pub mod classifier;
pub mod types;

#[cfg(test)]
mod classifier_props;

pub use classifier::{AccountRow, classify};
pub use types::{AccountCategory, AccountKind, BalanceItem, BalanceSection, BalanceSheet, MaturityBucket};
