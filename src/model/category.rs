use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::validation::ValidationError,
    model::{item::ItemDto, MAX_NAME_LEN},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryDto {
    pub name: String,
}

fn validate_name(name: &str, errors: &mut ValidationError) {
    if name.trim().is_empty() {
        errors.push("name", "Category name is required.");
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.push("name", "Category name cannot exceed 150 characters.");
    }
}

impl CreateCategoryDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        validate_name(&self.name, &mut errors);
        errors.into_result()
    }
}

impl UpdateCategoryDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        validate_name(&self.name, &mut errors);
        errors.into_result()
    }
}

/// A category row together with its (optionally eager-loaded) items.
#[derive(Debug, Clone)]
pub struct CategoryWithItems {
    pub category: entity::category::Model,
    pub items: Vec<entity::item::Model>,
}

impl CategoryWithItems {
    /// Converts the joined shape to the API response DTO.
    ///
    /// Nested items carry the parent category's name, since the join already
    /// resolved it.
    pub fn into_dto(self) -> CategoryDto {
        let category_name = self.category.name.clone();

        CategoryDto {
            id: self.category.id,
            name: self.category.name,
            items: self
                .items
                .into_iter()
                .map(|item| ItemDto::from_model(item, category_name.clone()))
                .collect(),
        }
    }
}
