//! Item factory for creating test item rows.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test items with customizable fields.
///
/// Provides a builder pattern for creating item rows with default values that can
/// be overridden as needed for specific test scenarios. The referenced category
/// must already exist; the id is assigned by the store on insert.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item::ItemFactory;
///
/// let item = ItemFactory::new(&db, category.id)
///     .name("Cable")
///     .quantity(10)
///     .price(Decimal::new(250, 2))
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    quantity: i32,
    price: Decimal,
    category_id: i32,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new factory with a unique default name and fixture defaults.
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        Self {
            db,
            name: format!("Item {}", next_id()),
            description: None,
            quantity: fixture::item::DEFAULT_QUANTITY,
            price: fixture::item::default_price(),
            category_id,
        }
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the item description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the stocked quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Inserts the item and returns the stored row.
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            quantity: ActiveValue::Set(self.quantity),
            price: ActiveValue::Set(self.price),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item with default values under the given category.
pub async fn create_item(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, category_id).build().await
}
