//! Balance sheet domain types.
//!
//! Account tags arrive over the wire as compound strings such as
//! `"ASSET_CIRCULANTE"` or `"LIABILITY_DIFERIDO"`. The tag is decoded once,
//! at write time, into an [`AccountKind`]; classification never re-parses
//! strings. The original string is kept so stored rows round-trip unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primary balance sheet category, taken from the tag prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Asset accounts (`ASSET` prefix).
    Asset,
    /// Liability accounts (`LIABILITY` prefix).
    Liability,
}

/// Maturity sub-classification within a category.
///
/// Resolved by substring containment in priority order: `CIRCULANTE`,
/// then `FIJO`, then `DIFERIDO`. First match wins, so a tag like
/// `LIABILITY_FIJOCIRCULANTE` resolves to `Current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityBucket {
    /// Current (short-term) accounts, `CIRCULANTE`.
    Current,
    /// Fixed (long-term) accounts, `FIJO`.
    Fixed,
    /// Deferred accounts, `DIFERIDO`.
    Deferred,
}

/// Decoded account tag: primary category plus optional maturity bucket.
///
/// A tag with a recognized category prefix but no recognized maturity
/// substring is valid: the row counts toward the category total but is
/// listed in no bucket. That asymmetry is intentional and kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKind {
    /// Primary category.
    pub category: AccountCategory,
    /// Maturity bucket, if the tag names one.
    pub bucket: Option<MaturityBucket>,
    /// The original compound tag, preserved for storage round-trips.
    raw: String,
}

impl AccountKind {
    /// Decodes a compound tag string.
    ///
    /// Returns `None` when the tag starts with neither `ASSET` nor
    /// `LIABILITY`. Matching is case-sensitive, as in the wire encoding.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let category = if tag.starts_with("ASSET") {
            AccountCategory::Asset
        } else if tag.starts_with("LIABILITY") {
            AccountCategory::Liability
        } else {
            return None;
        };

        // Priority order matters: first match wins.
        let bucket = if tag.contains("CIRCULANTE") {
            Some(MaturityBucket::Current)
        } else if tag.contains("FIJO") {
            Some(MaturityBucket::Fixed)
        } else if tag.contains("DIFERIDO") {
            Some(MaturityBucket::Deferred)
        } else {
            None
        };

        Some(Self {
            category,
            bucket,
            raw: tag.to_string(),
        })
    }

    /// Returns the original compound tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// One line item inside a bucket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceItem {
    /// Ledger account id, so the balance view stays editable.
    pub id: Uuid,
    /// Account name.
    pub name: String,
    /// Account amount.
    pub amount: Decimal,
}

/// One side of the balance sheet (asset or liability).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSection {
    /// Current (short-term) accounts.
    pub current: Vec<BalanceItem>,
    /// Fixed (long-term) accounts.
    pub fixed: Vec<BalanceItem>,
    /// Deferred accounts.
    pub deferred: Vec<BalanceItem>,
    /// Sum over every account in the category, bucketed or not.
    pub total: Decimal,
}

/// Structured balance sheet. Computed on every query, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Asset side.
    pub asset: BalanceSection,
    /// Liability side.
    pub liability: BalanceSection,
    /// Residual equity: `asset.total - liability.total`.
    pub equity: Decimal,
}
