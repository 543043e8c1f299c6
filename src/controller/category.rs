use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveValue;

use crate::{
    data::{category::CategoryInclude, unit_of_work::UnitOfWork},
    error::AppError,
    model::{
        api::{ErrorDto, ValidationErrorDto},
        category::{CategoryDto, CategoryWithItems, CreateCategoryDto, UpdateCategoryDto},
    },
    state::AppState,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories.
///
/// Returns every category with its items eager-loaded.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::new(&state.db);

    let categories = uow.categories.get_all(CategoryInclude::Items).await?;

    let dtos: Vec<CategoryDto> = categories
        .into_iter()
        .map(CategoryWithItems::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a category by its ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the category to retrieve
///
/// # Returns
/// - `200 OK` - The category with its items
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::new(&state.db);

    let category = uow
        .categories
        .get_by_id(id, CategoryInclude::Items)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a new category.
///
/// Stages the insert and saves it; the id is assigned by the store at save
/// time and echoed back in the Location header.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Category creation data
///
/// # Returns
/// - `201 Created` - Successfully created category, Location header set
/// - `400 Bad Request` - Invalid category data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut uow = UnitOfWork::new(&state.db);

    uow.categories.add(entity::category::ActiveModel {
        name: ActiveValue::Set(payload.name),
        ..Default::default()
    });

    let report = uow.save().await?;

    let created = report
        .created_categories
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError("save returned no created category".to_string()))?;

    let location = format!("/api/categories/{}", created.id);
    let dto = CategoryWithItems {
        category: created,
        items: Vec::new(),
    }
    .into_dto();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(dto),
    ))
}

/// Update an existing category by its ID.
///
/// Overwrites every mutable field with the payload; no partial-patch
/// semantics.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the category to update
/// - `payload` - Updated category data
///
/// # Returns
/// - `204 No Content` - Successfully updated
/// - `400 Bad Request` - Invalid category data
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 204, description = "Successfully updated category"),
        (status = 400, description = "Invalid category data", body = ValidationErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut uow = UnitOfWork::new(&state.db);

    let existing = uow
        .categories
        .get_by_id(id, CategoryInclude::Bare)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

    let mut category = existing.category;
    category.name = payload.name;

    uow.categories.update(category);
    uow.save().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category by its ID.
///
/// The store's restrict-on-delete foreign key rejects the save when any item
/// still references the category.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the category to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error, including a still-referenced category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::new(&state.db);

    let existing = uow
        .categories
        .get_by_id(id, CategoryInclude::Bare)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))?;

    uow.categories.remove(existing.category);
    uow.save().await?;

    Ok(StatusCode::NO_CONTENT)
}
