use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::products;

/// Fixed-shape action links attached to every product payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiUrls {
    pub get: String,
    pub favorite: String,
    pub cart_add: String,
    pub cart_remove: String,
    pub cart_update: String,
}

/// Display-ready product row: price/discount carry their display suffixes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductView {
    pub id: i64,
    pub brand_name: String,
    pub product_name: String,
    pub image_url: String,
    /// e.g. `"15,000원"`
    pub price: String,
    /// e.g. `"10%"`
    pub discount: String,
    pub likes: i64,
    pub reviews: String,
    pub is_favorite: bool,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub api_urls: ApiUrls,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<ProductView>)]
    pub items: Vec<ProductView>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub brand_name: String,
    pub product_name: String,
    pub image_url: String,
    pub price: i64,
    pub discount: i32,
    pub category: String,
}

impl CreateProductRequest {
    pub fn into_active_model(self) -> products::ActiveModel {
        products::ActiveModel {
            id: NotSet,
            brand_name: Set(self.brand_name),
            product_name: Set(self.product_name),
            image_url: Set(self.image_url),
            price: Set(self.price),
            discount: Set(self.discount),
            likes: Set(0),
            reviews: Set("0".to_string()),
            is_favorite: Set(false),
            category: Set(self.category),
            created_at: NotSet,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub brand_name: Option<String>,
    pub product_name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<i64>,
    pub discount: Option<i32>,
    pub likes: Option<i64>,
    pub reviews: Option<String>,
    pub is_favorite: Option<bool>,
    pub category: Option<String>,
}
