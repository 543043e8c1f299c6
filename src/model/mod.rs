//! Request/response DTOs and domain read models.
//!
//! DTOs carry the JSON wire shapes of the API (camelCase field names) and
//! validate themselves before anything reaches the data layer. The `*With*`
//! structs are the joined shapes produced by the repositories, with `into_dto`
//! conversions at the controller boundary.

pub mod api;
pub mod category;
pub mod item;

/// Maximum length of a category or item name.
pub const MAX_NAME_LEN: usize = 150;

/// Maximum length of an item description.
pub const MAX_DESCRIPTION_LEN: usize = 1000;
