//! Repository abstractions for data access.

pub mod history;
pub mod ledger;

pub use history::HistoryRepository;
pub use ledger::LedgerRepository;

/// Merges the distinct company lists of both stores.
///
/// `company` is a free-text join key across `ledger_accounts` and
/// `income_history` with no foreign keys; a company present in either (or
/// both) appears exactly once, sorted.
#[must_use]
pub fn merge_companies(ledger: Vec<String>, history: Vec<String>) -> Vec<String> {
    let mut companies: Vec<String> = ledger;
    companies.extend(history);
    companies.sort();
    companies.dedup();
    companies
}
