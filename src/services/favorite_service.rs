use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

use crate::{
    dto::products::{ProductView, UpdateProductRequest},
    entity::products::{Column, Entity as Products, Model as ProductModel},
    error::AppResult,
    format,
    services::product_service,
    state::AppState,
};

pub async fn favorite_products(state: &AppState) -> AppResult<Vec<ProductView>> {
    let models = Products::find()
        .filter(Column::IsFavorite.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?;
    Ok(format::product_views(&state.base_url, models))
}

/// Flip the favorite flag and move the like counter with it, clamped at 0.
/// Runs read and write in one transaction so concurrent toggles cannot lose
/// updates. Returns the updated row.
pub async fn toggle_favorite(state: &AppState, product_id: i64) -> AppResult<ProductModel> {
    let txn = state.orm.begin().await?;

    let product = product_service::find_product(&txn, product_id).await?;
    let now_favorite = !product.is_favorite;
    let likes = if now_favorite {
        product.likes + 1
    } else {
        (product.likes - 1).max(0)
    };

    let patch = UpdateProductRequest {
        is_favorite: Some(now_favorite),
        likes: Some(likes),
        ..UpdateProductRequest::default()
    };
    let updated = product_service::apply_update(&txn, product, patch).await?;

    txn.commit().await?;
    Ok(updated)
}
