use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::cart::{AddToCartRequest, CartItemView, UpdateCartItemRequest},
    dto::user::CartAndFavorites,
    entity::cart_items::{ActiveModel, Column, Entity as CartItems, Model as CartItemModel},
    entity::products,
    entity::Products,
    error::{AppError, AppResult},
    format,
    services::{favorite_service, product_service},
    state::AppState,
};

/// Cart rows joined with their products, newest first. Rows whose quantity
/// has been driven to 0 are not cart contents and are filtered out.
pub async fn list_cart_items(
    state: &AppState,
    user_id: Option<i64>,
) -> AppResult<Vec<CartItemView>> {
    let mut finder = CartItems::find().filter(Column::Quantity.gt(0));
    if let Some(user_id) = user_id {
        finder = finder.filter(Column::UserId.eq(user_id));
    }

    let rows = finder
        .find_also_related(Products)
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(item, product)| {
            product.map(|product| cart_item_view(&state.base_url, item, product))
        })
        .collect())
}

/// Increment the existing (user, product) row or insert a fresh one, in a
/// single transaction. Returns the row and whether it was newly created.
pub async fn add_to_cart(
    state: &AppState,
    user_id: i64,
    product_id: i64,
    quantity: i32,
) -> AppResult<(CartItemModel, bool)> {
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let txn = state.orm.begin().await?;

    product_service::find_product(&txn, product_id).await?;

    let existing = CartItems::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ProductId.eq(product_id))
        .one(&txn)
        .await?;

    let (item, created) = match existing {
        Some(item) => {
            let new_quantity = item.quantity + quantity;
            let mut active: ActiveModel = item.into();
            active.quantity = Set(new_quantity);
            active.updated_at = Set(Utc::now().into());
            (active.update(&txn).await?, false)
        }
        None => {
            let request = AddToCartRequest {
                user_id,
                product_id,
                quantity,
                selected_options: String::new(),
            };
            (request.into_active_model().insert(&txn).await?, true)
        }
    };

    txn.commit().await?;
    Ok((item, created))
}

/// Unconditional delete; removing an absent row is a no-op, not an error.
pub async fn remove_from_cart(state: &AppState, user_id: i64, product_id: i64) -> AppResult<u64> {
    let result = CartItems::delete_many()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;
    Ok(result.rows_affected)
}

/// Apply the set fields of a partial update to the (user, product) row.
/// When no row matches, nothing happens and 0 is returned.
pub async fn update_cart_item(
    state: &AppState,
    user_id: i64,
    product_id: i64,
    patch: UpdateCartItemRequest,
) -> AppResult<u64> {
    if patch.is_empty() {
        return Ok(0);
    }

    let mut update = CartItems::update_many().col_expr(Column::UpdatedAt, Expr::value(Utc::now()));
    if let Some(quantity) = patch.quantity {
        update = update.col_expr(Column::Quantity, Expr::value(quantity));
    }
    if let Some(selected_options) = patch.selected_options {
        update = update.col_expr(Column::SelectedOptions, Expr::value(selected_options));
    }

    let result = update
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ProductId.eq(product_id))
        .exec(&state.orm)
        .await?;
    Ok(result.rows_affected)
}

/// The caller's live cart row for one product, if any.
pub async fn cart_state(
    state: &AppState,
    user_id: i64,
    product_id: i64,
) -> AppResult<Option<CartItemModel>> {
    let item = CartItems::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ProductId.eq(product_id))
        .filter(Column::Quantity.gt(0))
        .one(&state.orm)
        .await?;
    Ok(item)
}

pub async fn cart_and_favorites(state: &AppState, user_id: i64) -> AppResult<CartAndFavorites> {
    let cart_items = list_cart_items(state, Some(user_id)).await?;
    let favorites = favorite_service::favorite_products(state).await?;

    Ok(CartAndFavorites {
        user_id,
        cart_count: cart_items.len(),
        favorites_count: favorites.len(),
        cart_items,
        favorites,
    })
}

fn cart_item_view(
    base_url: &str,
    item: CartItemModel,
    product: products::Model,
) -> CartItemView {
    CartItemView {
        cart_item_id: item.id,
        user_id: item.user_id,
        quantity: item.quantity,
        selected_options: item.selected_options,
        product: format::product_view(base_url, product),
    }
}
