use sea_orm::ActiveValue::{NotSet, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::product_qa;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQaRequest {
    pub product_id: i64,
    pub question: String,
    pub answer: String,
    pub user_name: String,
}

impl CreateQaRequest {
    pub fn into_active_model(self) -> product_qa::ActiveModel {
        product_qa::ActiveModel {
            id: NotSet,
            product_id: Set(self.product_id),
            question: Set(self.question),
            answer: Set(self.answer),
            user_name: Set(self.user_name),
            created_at: NotSet,
            answered_at: NotSet,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateQaRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub user_name: Option<String>,
}
