pub mod cart_items;
pub mod product_qa;
pub mod product_reviews;
pub mod products;
pub mod view_history;

pub use cart_items::Entity as CartItems;
pub use product_qa::Entity as ProductQa;
pub use product_reviews::Entity as ProductReviews;
pub use products::Entity as Products;
pub use view_history::Entity as ViewHistory;
