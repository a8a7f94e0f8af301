use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::products::ProductView;
use crate::entity::cart_items;

/// Cart row joined with its product, product already in display form.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemView {
    pub cart_item_id: i64,
    pub user_id: i64,
    pub quantity: i32,
    pub selected_options: String,
    pub product: ProductView,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartList {
    #[schema(value_type = Vec<CartItemView>)]
    pub items: Vec<CartItemView>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub selected_options: String,
}

impl AddToCartRequest {
    pub fn into_active_model(self) -> cart_items::ActiveModel {
        cart_items::ActiveModel {
            id: NotSet,
            user_id: Set(self.user_id),
            product_id: Set(self.product_id),
            quantity: Set(self.quantity),
            selected_options: Set(self.selected_options),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub quantity: Option<i32>,
    pub selected_options: Option<String>,
}

impl UpdateCartItemRequest {
    pub fn quantity(quantity: i32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.selected_options.is_none()
    }
}
