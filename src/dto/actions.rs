use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::products::ProductView;

/// Consolidated answer of the unified action endpoint: the (re-read) product
/// plus the caller's cart/favorite standing for it.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionSummary {
    pub product: ProductView,
    pub is_favorite: bool,
    pub in_cart: bool,
    pub cart_quantity: i32,
    pub likes: i64,
}
