use sea_orm::{DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait};

/// A mutation recorded in memory but not yet written to the store.
///
/// Staged changes are drained by the unit of work at save time and applied
/// inside a single transaction, in staging order.
pub enum StagedChange<A> {
    Insert(A),
    Update(A),
    Delete(A),
}

/// Uniform CRUD surface parameterized over an entity type.
///
/// Reads run immediately against the pooled connection. Mutations are staged
/// as [`StagedChange`] values; nothing is written until the owning unit of
/// work saves, which defers failure surfacing (constraint violations in
/// particular) to save time.
pub struct Repository<E>
where
    E: EntityTrait,
{
    db: DatabaseConnection,
    staged: Vec<StagedChange<E::ActiveModel>>,
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            staged: Vec::new(),
        }
    }

    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns all rows. Full scan semantics: no pagination, no filtering.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    /// Single-row lookup by primary key; `None` (not an error) when no match.
    pub async fn get_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// Stages an insert; identity is assigned by the store on save, not immediately.
    pub fn add(&mut self, entity: E::ActiveModel) {
        self.staged.push(StagedChange::Insert(entity));
    }

    /// Stages a delete.
    pub fn remove(&mut self, entity: E::Model) {
        self.staged
            .push(StagedChange::Delete(entity.into_active_model()));
    }

    /// Stages an update.
    pub fn stage_update(&mut self, entity: E::ActiveModel) {
        self.staged.push(StagedChange::Update(entity));
    }

    /// Number of staged, unsaved changes.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    pub(crate) fn take_staged(&mut self) -> Vec<StagedChange<E::ActiveModel>> {
        std::mem::take(&mut self.staged)
    }
}
