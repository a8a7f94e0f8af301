use sea_orm::ActiveValue::{NotSet, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::product_reviews;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub product_id: i64,
    pub user_name: String,
    pub rating: i32,
    pub content: String,
}

impl CreateReviewRequest {
    pub fn into_active_model(self) -> product_reviews::ActiveModel {
        product_reviews::ActiveModel {
            id: NotSet,
            product_id: Set(self.product_id),
            user_name: Set(self.user_name),
            rating: Set(self.rating),
            content: Set(self.content),
            created_at: NotSet,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub user_name: Option<String>,
    pub rating: Option<i32>,
    pub content: Option<String>,
}
