use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{category, item},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "stockroom", description = "Inventory tracking API"),
    tags(
        (name = "category", description = "Category CRUD endpoints"),
        (name = "item", description = "Item CRUD endpoints")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(category::get_all_categories, category::create_category))
        .routes(routes!(
            category::get_category_by_id,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(item::get_all_items, item::create_item))
        .routes(routes!(
            item::get_item_by_id,
            item::update_item,
            item::delete_item
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
