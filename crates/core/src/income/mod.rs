//! Income statement derivation.
//!
//! A fixed chain of accounting subtotals computed from one immutable input
//! record. Pure and total: any finite decimal input yields a finite result.

pub mod engine;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::{compute, income_tax_rate, profit_sharing_rate};
pub use types::{IncomeStatement, IncomeStatementInput};
