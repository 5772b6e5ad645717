//! Initial schema: ledger accounts and income history.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS income_history; DROP TABLE IF EXISTS ledger_accounts;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Balance sheet line items, one row per account per company.
-- account_type keeps the compound wire encoding (e.g. 'ASSET_CIRCULANTE');
-- it is validated at write time, never re-parsed by the database.
CREATE TABLE ledger_accounts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company TEXT NOT NULL,
    name TEXT NOT NULL,
    amount NUMERIC(20, 4) NOT NULL,
    account_type VARCHAR(64) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Company-scoped reads in insertion order (the classifier relies on it)
CREATE INDEX idx_ledger_accounts_company ON ledger_accounts(company, created_at, id);

-- Append-only log of computed net income results
CREATE TABLE income_history (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company TEXT NOT NULL,
    recorded_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    net_income NUMERIC(20, 4) NOT NULL
);

-- Per-company history, newest first
CREATE INDEX idx_income_history_company ON income_history(company, recorded_at DESC);
";
