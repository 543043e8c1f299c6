use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveValue;

use crate::{
    data::{item::ItemInclude, unit_of_work::UnitOfWork},
    error::AppError,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        item::{CreateItemDto, ItemDto, ItemWithCategory, UpdateItemDto},
    },
    state::AppState,
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// Get all items.
///
/// Returns every item with its category eager-loaded so the response can
/// carry the current category name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of items
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved items", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::new(&state.db);

    let items = uow.items.get_all(ItemInclude::Category).await?;

    let dtos: Vec<ItemDto> = items.into_iter().map(ItemWithCategory::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an item by its ID.
///
/// The category name in the response reflects the category's current state,
/// not a snapshot taken when the item was created.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the item to retrieve
///
/// # Returns
/// - `200 OK` - The item
/// - `404 Not Found` - No item with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::new(&state.db);

    let item = uow
        .items
        .get_by_id(id, ItemInclude::Category)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Create a new item.
///
/// Stages the insert and saves it. The category reference is enforced by the
/// store's foreign key at save time; a missing category fails the save.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Item creation data
///
/// # Returns
/// - `201 Created` - Successfully created item, Location header set
/// - `400 Bad Request` - Invalid item data
/// - `500 Internal Server Error` - Database error, including an unknown category id
#[utoipa::path(
    post,
    path = "/api/items",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut uow = UnitOfWork::new(&state.db);

    uow.items.add(entity::item::ActiveModel {
        name: ActiveValue::Set(payload.name),
        description: ActiveValue::Set(payload.description),
        quantity: ActiveValue::Set(payload.quantity),
        price: ActiveValue::Set(payload.price),
        category_id: ActiveValue::Set(payload.category_id),
        ..Default::default()
    });

    let report = uow.save().await?;

    let created = report
        .created_items
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError("save returned no created item".to_string()))?;

    // Re-read with the category joined so the response carries its name
    let item = uow
        .items
        .get_by_id(created.id, ItemInclude::Category)
        .await?
        .ok_or_else(|| AppError::InternalError("created item not found after save".to_string()))?;

    let location = format!("/api/items/{}", item.item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item.into_dto()),
    ))
}

/// Update an existing item by its ID.
///
/// Overwrites every mutable field with the payload; no partial-patch
/// semantics. Changing the category reference to an unknown id fails at save
/// time and leaves the stored row unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the item to update
/// - `payload` - Updated item data
///
/// # Returns
/// - `204 No Content` - Successfully updated
/// - `400 Bad Request` - Invalid item data
/// - `404 Not Found` - No item with this ID
/// - `500 Internal Server Error` - Database error, including an unknown category id
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 204, description = "Successfully updated item"),
        (status = 400, description = "Invalid item data", body = ValidationErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut uow = UnitOfWork::new(&state.db);

    let existing = uow
        .items
        .get_by_id(id, ItemInclude::Bare)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))?;

    let mut item = existing.item;
    item.name = payload.name;
    item.description = payload.description;
    item.quantity = payload.quantity;
    item.price = payload.price;
    item.category_id = payload.category_id;

    uow.items.update(item);
    uow.save().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item by its ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the item to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No item with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted item"),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::new(&state.db);

    let existing = uow
        .items
        .get_by_id(id, ItemInclude::Bare)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))?;

    uow.items.remove(existing.item);
    uow.save().await?;

    Ok(StatusCode::NO_CONTENT)
}
