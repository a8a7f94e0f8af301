use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::cart::CartItemView;
use crate::dto::products::ProductView;

#[derive(Debug, Serialize, ToSchema)]
pub struct CartAndFavorites {
    pub user_id: i64,
    pub cart_items: Vec<CartItemView>,
    pub favorites: Vec<ProductView>,
    pub cart_count: usize,
    pub favorites_count: usize,
}
