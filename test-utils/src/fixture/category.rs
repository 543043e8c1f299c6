//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Test Category";

/// Creates a category entity model with default values.
///
/// This function creates an in-memory category entity without inserting into the
/// database. Use this for unit tests that need a model value.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Category"`
///
/// # Returns
/// - `category::Model` - In-memory category entity
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
    }
}
