use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait};

use crate::{
    data::repository::{Repository, StagedChange},
    model::category::CategoryWithItems,
};

/// Relations that can be eager-loaded alongside a category row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryInclude {
    /// The category row alone.
    Bare,
    /// Eager-load the owned item rows.
    Items,
}

pub struct CategoryRepository {
    repo: Repository<entity::prelude::Category>,
}

impl CategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }

    /// Gets all categories, optionally eager-loading their items.
    pub async fn get_all(&self, include: CategoryInclude) -> Result<Vec<CategoryWithItems>, DbErr> {
        match include {
            CategoryInclude::Bare => Ok(self
                .repo
                .get_all()
                .await?
                .into_iter()
                .map(|category| CategoryWithItems {
                    category,
                    items: Vec::new(),
                })
                .collect()),
            CategoryInclude::Items => Ok(entity::prelude::Category::find()
                .find_with_related(entity::prelude::Item)
                .all(self.repo.connection())
                .await?
                .into_iter()
                .map(|(category, items)| CategoryWithItems { category, items })
                .collect()),
        }
    }

    /// Gets a category by ID, optionally eager-loading its items.
    pub async fn get_by_id(
        &self,
        id: i32,
        include: CategoryInclude,
    ) -> Result<Option<CategoryWithItems>, DbErr> {
        let Some(category) = self.repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let items = match include {
            CategoryInclude::Bare => Vec::new(),
            CategoryInclude::Items => {
                category
                    .find_related(entity::prelude::Item)
                    .all(self.repo.connection())
                    .await?
            }
        };

        Ok(Some(CategoryWithItems { category, items }))
    }

    /// Stages an insert; the id is assigned by the store on save.
    pub fn add(&mut self, category: entity::category::ActiveModel) {
        self.repo.add(category);
    }

    /// Stages a full-entity update: every mutable field is overwritten on save.
    pub fn update(&mut self, category: entity::category::Model) {
        self.repo.stage_update(entity::category::ActiveModel {
            id: ActiveValue::Unchanged(category.id),
            name: ActiveValue::Set(category.name),
        });
    }

    /// Stages a delete.
    pub fn remove(&mut self, category: entity::category::Model) {
        self.repo.remove(category);
    }

    /// Number of staged, unsaved changes.
    pub fn staged_len(&self) -> usize {
        self.repo.staged_len()
    }

    pub(crate) fn take_staged(&mut self) -> Vec<StagedChange<entity::category::ActiveModel>> {
        self.repo.take_staged()
    }
}
