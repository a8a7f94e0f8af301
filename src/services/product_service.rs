use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::products::{ProductView, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    format,
    state::AppState,
};

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

const RANKING_SIZE: u64 = 20;

pub async fn list_products(
    state: &AppState,
    offset: u64,
    limit: u64,
    category: Option<&str>,
) -> AppResult<Vec<ProductView>> {
    let mut condition = Condition::all();
    if let Some(category) = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES) {
        condition = condition.add(Column::Category.eq(category));
    }

    let models = Products::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt)
        .offset(offset)
        .limit(limit)
        .all(&state.orm)
        .await?;

    Ok(format::product_views(&state.base_url, models))
}

pub async fn list_all_products(state: &AppState) -> AppResult<Vec<ProductView>> {
    let models = Products::find()
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?;
    Ok(format::product_views(&state.base_url, models))
}

pub async fn get_product(state: &AppState, id: i64) -> AppResult<ProductView> {
    let model = find_product(&state.orm, id).await?;
    Ok(format::product_view(&state.base_url, model))
}

/// Raw row lookup shared by the mutation paths.
pub async fn find_product<C: ConnectionTrait>(conn: &C, id: i64) -> AppResult<ProductModel> {
    Products::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}

/// Case-insensitive substring match on product or brand name. An empty or
/// whitespace-only query returns an empty list without touching the database.
pub async fn search_products(state: &AppState, q: &str) -> AppResult<Vec<ProductView>> {
    let q = q.trim();
    if q.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = format!("%{q}%");
    let condition = Condition::any()
        .add(Expr::col(Column::ProductName).ilike(pattern.clone()))
        .add(Expr::col(Column::BrandName).ilike(pattern));

    let models = Products::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?;

    Ok(format::product_views(&state.base_url, models))
}

pub async fn ranking(state: &AppState) -> AppResult<Vec<ProductView>> {
    let models = Products::find()
        .order_by_desc(Column::Likes)
        .limit(RANKING_SIZE)
        .all(&state.orm)
        .await?;
    Ok(format::product_views(&state.base_url, models))
}

/// Apply the set fields of a partial update to an already-fetched row.
pub async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    model: ProductModel,
    patch: UpdateProductRequest,
) -> AppResult<ProductModel> {
    let mut active: ActiveModel = model.into();
    if let Some(brand_name) = patch.brand_name {
        active.brand_name = Set(brand_name);
    }
    if let Some(product_name) = patch.product_name {
        active.product_name = Set(product_name);
    }
    if let Some(image_url) = patch.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(price) = patch.price {
        active.price = Set(price);
    }
    if let Some(discount) = patch.discount {
        active.discount = Set(discount);
    }
    if let Some(likes) = patch.likes {
        active.likes = Set(likes);
    }
    if let Some(reviews) = patch.reviews {
        active.reviews = Set(reviews);
    }
    if let Some(is_favorite) = patch.is_favorite {
        active.is_favorite = Set(is_favorite);
    }
    if let Some(category) = patch.category {
        active.category = Set(category);
    }

    let product = active.update(conn).await?;
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DatabaseConnection;

    // A disconnected handle: any query attempt would fail, so reaching Ok
    // proves the short-circuit never queried.
    fn disconnected_state() -> AppState {
        AppState::new(DatabaseConnection::Disconnected, "http://localhost:8001")
    }

    #[tokio::test]
    async fn empty_search_short_circuits_without_querying() {
        let state = disconnected_state();
        let results = search_products(&state, "").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn whitespace_search_short_circuits_without_querying() {
        let state = disconnected_state();
        let results = search_products(&state, "   \t ").await.unwrap();
        assert!(results.is_empty());
    }
}
