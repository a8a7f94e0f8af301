pub mod cart_service;
pub mod favorite_service;
pub mod product_service;
pub mod view_service;
