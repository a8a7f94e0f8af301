use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub brand_name: String,
    pub product_name: String,
    pub image_url: String,
    pub price: i64,
    pub discount: i32,
    pub likes: i64,
    /// Display string ("1,234"), carried through as stored.
    pub reviews: String,
    pub is_favorite: bool,
    pub category: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_items::Entity")]
    CartItems,
    #[sea_orm(has_many = "super::view_history::Entity")]
    ViewHistory,
    #[sea_orm(has_many = "super::product_qa::Entity")]
    ProductQa,
    #[sea_orm(has_many = "super::product_reviews::Entity")]
    ProductReviews,
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::view_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ViewHistory.def()
    }
}

impl Related<super::product_qa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductQa.def()
    }
}

impl Related<super::product_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductReviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
