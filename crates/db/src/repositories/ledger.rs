//! Ledger repository for balance account database operations.
//!
//! Every write is a single atomic statement against one row or one
//! company-scoped set. Edits and deletes referencing an absent id report
//! zero rows affected and succeed; callers decide whether that matters.

use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::ledger_accounts;

/// Input for creating a ledger account.
///
/// `account_type` carries the compound tag in its wire encoding; the caller
/// must have decoded and validated it before reaching the repository.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Owning company.
    pub company: String,
    /// Account name.
    pub name: String,
    /// Account amount.
    pub amount: Decimal,
    /// Compound account tag (e.g. `ASSET_CIRCULANTE`).
    pub account_type: String,
}

/// Input for editing a ledger account. Company is immutable.
#[derive(Debug, Clone)]
pub struct UpdateAccountInput {
    /// Replacement name.
    pub name: String,
    /// Replacement amount.
    pub amount: Decimal,
    /// Replacement compound tag.
    pub account_type: String,
}

/// Ledger account repository.
///
/// `Clone` is only available when `sea_orm::DatabaseConnection` is `Clone`,
/// i.e. when sea-orm's `mock` feature is off (it is enabled for mock-backed
/// test builds).
#[derive(Debug)]
#[cfg_attr(not(feature = "mock"), derive(Clone))]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one ledger account with a fresh id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<ledger_accounts::Model, DbErr> {
        let account = ledger_accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(input.company),
            name: Set(input.name),
            amount: Set(input.amount),
            account_type: Set(input.account_type),
            created_at: Set(chrono::Utc::now().into()),
        };

        account.insert(&self.db).await
    }

    /// Lists all accounts for one company in insertion order.
    ///
    /// The classifier preserves this order in its bucket lists, so the
    /// ordering here is part of the external contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn accounts_for_company(
        &self,
        company: &str,
    ) -> Result<Vec<ledger_accounts::Model>, DbErr> {
        ledger_accounts::Entity::find()
            .filter(ledger_accounts::Column::Company.eq(company))
            .order_by_asc(ledger_accounts::Column::CreatedAt)
            .order_by_asc(ledger_accounts::Column::Id)
            .all(&self.db)
            .await
    }

    /// Replaces the mutable fields of one account by id.
    ///
    /// Returns the number of rows affected; zero means the id does not
    /// exist, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the update statement fails.
    pub async fn update_account(
        &self,
        id: Uuid,
        input: UpdateAccountInput,
    ) -> Result<u64, DbErr> {
        let result = ledger_accounts::Entity::update_many()
            .col_expr(ledger_accounts::Column::Name, Expr::value(input.name))
            .col_expr(ledger_accounts::Column::Amount, Expr::value(input.amount))
            .col_expr(
                ledger_accounts::Column::AccountType,
                Expr::value(input.account_type),
            )
            .filter(ledger_accounts::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes one account by id. Zero rows affected is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    pub async fn delete_account(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = ledger_accounts::Entity::delete_many()
            .filter(ledger_accounts::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every account belonging to one company.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    pub async fn clear_company(&self, company: &str) -> Result<u64, DbErr> {
        let result = ledger_accounts::Entity::delete_many()
            .filter(ledger_accounts::Column::Company.eq(company))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the distinct companies present in the ledger store.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn companies(&self) -> Result<Vec<String>, DbErr> {
        ledger_accounts::Entity::find()
            .select_only()
            .column(ledger_accounts::Column::Company)
            .distinct()
            .order_by_asc(ledger_accounts::Column::Company)
            .into_tuple()
            .all(&self.db)
            .await
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
