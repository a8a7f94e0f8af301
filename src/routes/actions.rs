use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    dto::actions::ActionSummary,
    dto::cart::UpdateCartItemRequest,
    error::{AppError, AppResult},
    format,
    response::Envelope,
    routes::params::{ActionQuery, ProductAction},
    services::{cart_service, favorite_service, product_service, view_service},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/{action}/{product_id}",
    params(
        ("action" = String, Path, description = "get | favorite | cart-add | cart-remove | cart-update"),
        ("product_id" = i64, Path, description = "Product ID"),
        ("user_id" = Option<i64>, Query, description = "User ID, default 1"),
        ("quantity" = Option<i32>, Query, description = "Quantity, default 1"),
    ),
    responses(
        (status = 200, description = "Post-action product and cart state", body = Envelope<ActionSummary>),
        (status = 400, description = "Unknown action"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Actions"
)]
pub async fn unified_action(
    State(state): State<AppState>,
    Path((action, product_id)): Path<(String, i64)>,
    Query(query): Query<ActionQuery>,
) -> AppResult<Json<Envelope<ActionSummary>>> {
    let (user_id, quantity) = query.normalize();
    let action = ProductAction::parse(&action)
        .ok_or_else(|| AppError::BadRequest(format!("unsupported action: {action}")))?;

    let message = match action {
        ProductAction::Favorite => {
            let updated = favorite_service::toggle_favorite(&state, product_id).await?;
            if updated.is_favorite {
                "Added to favorites".to_string()
            } else {
                "Removed from favorites".to_string()
            }
        }
        ProductAction::CartAdd => {
            let (item, created) =
                cart_service::add_to_cart(&state, user_id, product_id, quantity).await?;
            if created {
                "Added to cart".to_string()
            } else {
                format!("Cart quantity updated to {}", item.quantity)
            }
        }
        ProductAction::CartRemove => {
            cart_service::remove_from_cart(&state, user_id, product_id).await?;
            "Removed from cart".to_string()
        }
        ProductAction::CartUpdate => {
            cart_service::update_cart_item(
                &state,
                user_id,
                product_id,
                UpdateCartItemRequest::quantity(quantity),
            )
            .await?;
            format!("Quantity set to {quantity}")
        }
        ProductAction::Get => "Product details".to_string(),
    };

    // Re-read so the summary reflects post-action state; also the 404 path
    // for actions that touch no product row.
    let product = product_service::find_product(&state.orm, product_id).await?;
    if action == ProductAction::Get {
        view_service::record_view(&state, user_id, product_id).await?;
    }
    let cart_entry = cart_service::cart_state(&state, user_id, product_id).await?;

    let summary = ActionSummary {
        is_favorite: product.is_favorite,
        likes: product.likes,
        in_cart: cart_entry.is_some(),
        cart_quantity: cart_entry.map_or(0, |item| item.quantity),
        product: format::product_view(&state.base_url, product),
    };

    Ok(Json(Envelope::ok(message, summary)))
}
