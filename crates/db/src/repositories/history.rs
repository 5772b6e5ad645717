//! History repository for the append-only net income log.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::income_history;

/// Income history repository.
///
/// `Clone` is only available when `sea_orm::DatabaseConnection` is `Clone`,
/// i.e. when sea-orm's `mock` feature is off (it is enabled for mock-backed
/// test builds).
#[derive(Debug)]
#[cfg_attr(not(feature = "mock"), derive(Clone))]
pub struct HistoryRepository {
    db: DatabaseConnection,
}

impl HistoryRepository {
    /// Creates a new history repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one net income row with a server-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn append(
        &self,
        company: &str,
        net_income: Decimal,
    ) -> Result<income_history::Model, DbErr> {
        let row = income_history::ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(company.to_string()),
            recorded_at: Set(chrono::Utc::now().into()),
            net_income: Set(net_income),
        };

        row.insert(&self.db).await
    }

    /// Lists the history rows for one company, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn history_for_company(
        &self,
        company: &str,
    ) -> Result<Vec<income_history::Model>, DbErr> {
        income_history::Entity::find()
            .filter(income_history::Column::Company.eq(company))
            .order_by_desc(income_history::Column::RecordedAt)
            .all(&self.db)
            .await
    }

    /// Returns the distinct companies present in the history store.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn companies(&self) -> Result<Vec<String>, DbErr> {
        income_history::Entity::find()
            .select_only()
            .column(income_history::Column::Company)
            .distinct()
            .order_by_asc(income_history::Column::Company)
            .into_tuple()
            .all(&self.db)
            .await
    }
}
