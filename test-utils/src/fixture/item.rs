//! Item fixtures for creating in-memory test data.

use entity::item;
use rust_decimal::Decimal;

/// Default test item name.
pub const DEFAULT_NAME: &str = "Test Item";

/// Default test item quantity.
pub const DEFAULT_QUANTITY: i32 = 5;

/// Default category ID for items.
pub const DEFAULT_CATEGORY_ID: i32 = 1;

/// Default test item price (9.99).
pub fn default_price() -> Decimal {
    Decimal::new(999, 2)
}

/// Creates an item entity model with default values.
///
/// This function creates an in-memory item entity without inserting into the
/// database. Use this for unit tests that need a model value.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Item"`
/// - description: `None`
/// - quantity: `5`
/// - price: `9.99`
/// - category_id: `1`
///
/// # Returns
/// - `item::Model` - In-memory item entity
pub fn entity() -> item::Model {
    item::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: None,
        quantity: DEFAULT_QUANTITY,
        price: default_price(),
        category_id: DEFAULT_CATEGORY_ID,
    }
}
