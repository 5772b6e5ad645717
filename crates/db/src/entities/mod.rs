//! `SeaORM` entity definitions.

pub mod income_history;
pub mod ledger_accounts;
