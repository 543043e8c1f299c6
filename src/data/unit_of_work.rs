use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, TransactionTrait,
};

use crate::{
    data::{category::CategoryRepository, item::ItemRepository, repository::StagedChange},
    error::persistence::PersistenceError,
};

/// Result of a successful save.
///
/// Carries the rows produced by staged inserts so callers can observe the
/// store-assigned identities. Updates and deletes produce no entries.
#[derive(Debug, Default)]
pub struct SaveReport {
    pub created_categories: Vec<entity::category::Model>,
    pub created_items: Vec<entity::item::Model>,
}

/// Coordinates the repositories of one request into a single atomic commit.
///
/// Owns one persistence-session handle (a clone of the pooled connection) and
/// exposes one repository per entity type over it. One instance is created per
/// inbound request and dropped at request end; staged state is never shared
/// across requests.
pub struct UnitOfWork {
    db: DatabaseConnection,
    pub categories: CategoryRepository,
    pub items: ItemRepository,
}

impl UnitOfWork {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            db: db.clone(),
            categories: CategoryRepository::new(db.clone()),
            items: ItemRepository::new(db.clone()),
        }
    }

    /// Commits all staged changes across both repositories as one transaction.
    ///
    /// Either every staged change lands or none do: on any failure the
    /// transaction is rolled back and the store is left exactly as it was
    /// before this request's changes. A save with nothing staged is a no-op
    /// that opens no transaction.
    ///
    /// # Returns
    /// - `Ok(SaveReport)` - All staged changes committed; report carries inserted rows
    /// - `Err(PersistenceError)` - Constraint violation, connectivity loss, or
    ///   conflict detected by the store; nothing was applied
    pub async fn save(&mut self) -> Result<SaveReport, PersistenceError> {
        let category_changes = self.categories.take_staged();
        let item_changes = self.items.take_staged();

        if category_changes.is_empty() && item_changes.is_empty() {
            return Ok(SaveReport::default());
        }

        let txn = self.db.begin().await.map_err(PersistenceError::from)?;

        match Self::apply(&txn, category_changes, item_changes).await {
            Ok(report) => {
                txn.commit().await.map_err(PersistenceError::from)?;
                Ok(report)
            }
            Err(err) => {
                // Dropping the transaction would also roll back; rolling back
                // explicitly surfaces secondary failures in the log.
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!("rollback after failed save also failed: {}", rollback_err);
                }
                Err(err.into())
            }
        }
    }

    /// Applies the drained changes in staging order, categories before items
    /// so parent rows land before their dependents.
    async fn apply(
        txn: &DatabaseTransaction,
        category_changes: Vec<StagedChange<entity::category::ActiveModel>>,
        item_changes: Vec<StagedChange<entity::item::ActiveModel>>,
    ) -> Result<SaveReport, DbErr> {
        let created_categories =
            apply_changes::<entity::prelude::Category>(txn, category_changes).await?;
        let created_items = apply_changes::<entity::prelude::Item>(txn, item_changes).await?;

        Ok(SaveReport {
            created_categories,
            created_items,
        })
    }
}

async fn apply_changes<E>(
    txn: &DatabaseTransaction,
    changes: Vec<StagedChange<E::ActiveModel>>,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    let mut inserted = Vec::new();

    for change in changes {
        match change {
            StagedChange::Insert(entity) => inserted.push(entity.insert(txn).await?),
            StagedChange::Update(entity) => {
                entity.update(txn).await?;
            }
            StagedChange::Delete(entity) => {
                entity.delete(txn).await?;
            }
        }
    }

    Ok(inserted)
}
