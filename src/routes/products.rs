use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    dto::products::{ProductList, ProductView},
    error::AppResult,
    response::Envelope,
    routes::params::{ProductPageQuery, RecentViewsQuery},
    services::{favorite_service, product_service, view_service},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("offset" = Option<u64>, Query, description = "Start index, default 0"),
        ("limit" = Option<u64>, Query, description = "Page size, default 20, max 100"),
        ("category" = Option<String>, Query, description = "Category filter; omit or pass `all` for everything"),
    ),
    responses(
        (status = 200, description = "Paged products, newest first", body = Envelope<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductPageQuery>,
) -> AppResult<Json<Envelope<ProductList>>> {
    let (offset, limit) = query.normalize();
    let items =
        product_service::list_products(&state, offset, limit, query.category.as_deref()).await?;
    Ok(Json(Envelope::ok("Products", ProductList { items })))
}

#[utoipa::path(
    get,
    path = "/products/all",
    responses(
        (status = 200, description = "Every product, newest first", body = Envelope<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_all_products(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<ProductList>>> {
    let items = product_service::list_all_products(&state).await?;
    Ok(Json(Envelope::ok("All products", ProductList { items })))
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product detail", body = Envelope<ProductView>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<Envelope<ProductView>>> {
    let product = product_service::get_product(&state, product_id).await?;
    Ok(Json(Envelope::ok("Product", product)))
}

#[utoipa::path(
    get,
    path = "/products-favorites",
    responses(
        (status = 200, description = "Favorite-flagged products", body = Envelope<ProductList>)
    ),
    tag = "Products"
)]
pub async fn favorite_products(
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<ProductList>>> {
    let items = favorite_service::favorite_products(&state).await?;
    Ok(Json(Envelope::ok("Favorite products", ProductList { items })))
}

#[utoipa::path(
    get,
    path = "/products-ranking",
    responses(
        (status = 200, description = "Top 20 products by likes", body = Envelope<ProductList>)
    ),
    tag = "Products"
)]
pub async fn ranking(State(state): State<AppState>) -> AppResult<Json<Envelope<ProductList>>> {
    let items = product_service::ranking(&state).await?;
    Ok(Json(Envelope::ok("Product ranking", ProductList { items })))
}

#[utoipa::path(
    get,
    path = "/products-recent-views",
    params(
        ("user_id" = Option<i64>, Query, description = "User ID, default 1"),
        ("limit" = Option<u64>, Query, description = "Max products, default 50"),
    ),
    responses(
        (status = 200, description = "Recently viewed products, newest products when no history", body = Envelope<ProductList>)
    ),
    tag = "Products"
)]
pub async fn recent_views(
    State(state): State<AppState>,
    Query(query): Query<RecentViewsQuery>,
) -> AppResult<Json<Envelope<ProductList>>> {
    let (user_id, limit) = query.normalize();
    let items = view_service::recent_views(&state, user_id, limit).await?;
    Ok(Json(Envelope::ok("Recently viewed", ProductList { items })))
}
