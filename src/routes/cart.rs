use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    dto::cart::CartList,
    dto::user::CartAndFavorites,
    error::AppResult,
    response::Envelope,
    routes::params::{CartQuery, UserQuery},
    services::cart_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/cart-items",
    params(
        ("user_id" = Option<i64>, Query, description = "Filter by user; omit for all users"),
    ),
    responses(
        (status = 200, description = "Cart rows joined with their products", body = Envelope<CartList>)
    ),
    tag = "Cart"
)]
pub async fn cart_items(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<Envelope<CartList>>> {
    let items = cart_service::list_cart_items(&state, query.user_id).await?;
    Ok(Json(Envelope::ok("Cart items", CartList { items })))
}

#[utoipa::path(
    get,
    path = "/user/cart-and-favorites",
    params(
        ("user_id" = Option<i64>, Query, description = "User ID, default 1"),
    ),
    responses(
        (status = 200, description = "Cart contents plus favorite products", body = Envelope<CartAndFavorites>)
    ),
    tag = "Cart"
)]
pub async fn cart_and_favorites(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Envelope<CartAndFavorites>>> {
    let data = cart_service::cart_and_favorites(&state, query.normalize()).await?;
    Ok(Json(Envelope::ok("Cart and favorites", data)))
}
