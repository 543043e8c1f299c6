use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::validation::ValidationError,
    model::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category_id: i32,
}

fn validate_fields(
    name: &str,
    description: Option<&str>,
    quantity: i32,
    price: Decimal,
    errors: &mut ValidationError,
) {
    if name.trim().is_empty() {
        errors.push("name", "Item name is required.");
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.push("name", "Item name cannot exceed 150 characters.");
    }

    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push("description", "Description cannot exceed 1000 characters.");
        }
    }

    if quantity < 0 {
        errors.push("quantity", "Quantity must be a non-negative number.");
    }

    if price < Decimal::ZERO {
        errors.push("price", "Price must be a non-negative value.");
    }
}

impl CreateItemDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        validate_fields(
            &self.name,
            self.description.as_deref(),
            self.quantity,
            self.price,
            &mut errors,
        );
        errors.into_result()
    }
}

impl UpdateItemDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        validate_fields(
            &self.name,
            self.description.as_deref(),
            self.quantity,
            self.price,
            &mut errors,
        );
        errors.into_result()
    }
}

impl ItemDto {
    /// Builds the response DTO from a stored row and its resolved category name.
    pub fn from_model(item: entity::item::Model, category_name: String) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            price: item.price,
            category_id: item.category_id,
            category_name,
        }
    }
}

/// An item row together with its (optionally eager-loaded) category.
#[derive(Debug, Clone)]
pub struct ItemWithCategory {
    pub item: entity::item::Model,
    pub category: Option<entity::category::Model>,
}

impl ItemWithCategory {
    /// Converts the joined shape to the API response DTO.
    ///
    /// The foreign key guarantees a category exists for every stored item; the
    /// name falls back to empty only when the read skipped the join.
    pub fn into_dto(self) -> ItemDto {
        let category_name = self.category.map(|c| c.name).unwrap_or_default();

        ItemDto::from_model(self.item, category_name)
    }
}
