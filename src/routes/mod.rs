use axum::{Router, routing::get};

use crate::state::AppState;

pub mod actions;
pub mod cart;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;
pub mod search;

// Build the full route surface without binding state; it is provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/products", get(products::list_products))
        .route("/products/all", get(products::list_all_products))
        .route("/products/{product_id}", get(products::get_product))
        .route("/api/{action}/{product_id}", get(actions::unified_action))
        .route("/user/cart-and-favorites", get(cart::cart_and_favorites))
        .route("/products-favorites", get(products::favorite_products))
        .route("/cart-items", get(cart::cart_items))
        .route("/products-recent-views", get(products::recent_views))
        .route("/popular-search-terms", get(search::popular_terms))
        .route("/products-search", get(search::search_products))
        .route("/products-ranking", get(products::ranking))
}
