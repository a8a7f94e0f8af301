use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::{
    dto::products::ProductView,
    entity::products,
    entity::view_history::{ActiveModel, Column, Entity as ViewHistory},
    entity::Products,
    error::AppResult,
    format,
    state::AppState,
};

/// Upsert the caller's view-history entry for a product. Callers must have
/// confirmed the product exists; a dangling id would violate the FK.
pub async fn record_view(state: &AppState, user_id: i64, product_id: i64) -> AppResult<()> {
    let existing = ViewHistory::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ProductId.eq(product_id))
        .one(&state.orm)
        .await?;

    match existing {
        Some(entry) => {
            let mut active: ActiveModel = entry.into();
            active.viewed_at = Set(Utc::now().into());
            active.update(&state.orm).await?;
        }
        None => {
            ActiveModel {
                id: NotSet,
                user_id: Set(user_id),
                product_id: Set(product_id),
                viewed_at: Set(Utc::now().into()),
            }
            .insert(&state.orm)
            .await?;
        }
    }

    Ok(())
}

/// Most recently viewed products for a user. Users with no history yet get
/// the newest products instead so the shelf is never empty.
pub async fn recent_views(state: &AppState, user_id: i64, limit: u64) -> AppResult<Vec<ProductView>> {
    let rows = ViewHistory::find()
        .filter(Column::UserId.eq(user_id))
        .find_also_related(Products)
        .order_by_desc(Column::ViewedAt)
        .limit(limit)
        .all(&state.orm)
        .await?;

    let viewed: Vec<products::Model> = rows
        .into_iter()
        .filter_map(|(_, product)| product)
        .collect();

    if !viewed.is_empty() {
        return Ok(format::product_views(&state.base_url, viewed));
    }

    let fallback = Products::find()
        .order_by_desc(products::Column::CreatedAt)
        .limit(limit)
        .all(&state.orm)
        .await?;
    Ok(format::product_views(&state.base_url, fallback))
}
