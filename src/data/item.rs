use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    data::repository::{Repository, StagedChange},
    model::item::ItemWithCategory,
};

/// Relations that can be eager-loaded alongside an item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemInclude {
    /// The item row alone.
    Bare,
    /// Eager-load the referenced category row in the same query.
    Category,
}

pub struct ItemRepository {
    repo: Repository<entity::prelude::Item>,
}

impl ItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }

    /// Gets all items, optionally eager-loading the referenced category.
    pub async fn get_all(&self, include: ItemInclude) -> Result<Vec<ItemWithCategory>, DbErr> {
        match include {
            ItemInclude::Bare => Ok(self
                .repo
                .get_all()
                .await?
                .into_iter()
                .map(|item| ItemWithCategory {
                    item,
                    category: None,
                })
                .collect()),
            ItemInclude::Category => Ok(entity::prelude::Item::find()
                .find_also_related(entity::prelude::Category)
                .all(self.repo.connection())
                .await?
                .into_iter()
                .map(|(item, category)| ItemWithCategory { item, category })
                .collect()),
        }
    }

    /// Gets an item by ID, optionally eager-loading its category.
    pub async fn get_by_id(
        &self,
        id: i32,
        include: ItemInclude,
    ) -> Result<Option<ItemWithCategory>, DbErr> {
        match include {
            ItemInclude::Bare => Ok(self
                .repo
                .get_by_id(id)
                .await?
                .map(|item| ItemWithCategory {
                    item,
                    category: None,
                })),
            ItemInclude::Category => Ok(entity::prelude::Item::find_by_id(id)
                .find_also_related(entity::prelude::Category)
                .one(self.repo.connection())
                .await?
                .map(|(item, category)| ItemWithCategory { item, category })),
        }
    }

    /// Stages an insert; the id is assigned by the store on save.
    pub fn add(&mut self, item: entity::item::ActiveModel) {
        self.repo.add(item);
    }

    /// Stages a full-entity update: every mutable field is overwritten on save.
    pub fn update(&mut self, item: entity::item::Model) {
        self.repo.stage_update(entity::item::ActiveModel {
            id: ActiveValue::Unchanged(item.id),
            name: ActiveValue::Set(item.name),
            description: ActiveValue::Set(item.description),
            quantity: ActiveValue::Set(item.quantity),
            price: ActiveValue::Set(item.price),
            category_id: ActiveValue::Set(item.category_id),
        });
    }

    /// Stages a delete.
    pub fn remove(&mut self, item: entity::item::Model) {
        self.repo.remove(item);
    }

    /// Number of staged, unsaved changes.
    pub fn staged_len(&self) -> usize {
        self.repo.staged_len()
    }

    pub(crate) fn take_staged(&mut self) -> Vec<StagedChange<entity::item::ActiveModel>> {
        self.repo.take_staged()
    }
}
