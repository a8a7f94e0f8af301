//! Display formatting for catalog rows: currency/percent strings and the
//! per-product action links embedded in every payload.

use chrono::Utc;

use crate::dto::products::{ApiUrls, ProductView};
use crate::entity::products;

/// Integer part, thousands-grouped, suffixed with the currency marker.
pub fn format_price(price: i64) -> String {
    format!("{}원", group_thousands(price))
}

pub fn format_discount(discount: i32) -> String {
    format!("{discount}%")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

impl ApiUrls {
    pub fn for_product(base_url: &str, product_id: i64) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            get: format!("{base}/api/get/{product_id}"),
            favorite: format!("{base}/api/favorite/{product_id}"),
            cart_add: format!("{base}/api/cart-add/{product_id}"),
            cart_remove: format!("{base}/api/cart-remove/{product_id}"),
            cart_update: format!("{base}/api/cart-update/{product_id}"),
        }
    }
}

/// Turn a raw product row into its display form.
pub fn product_view(base_url: &str, model: products::Model) -> ProductView {
    ProductView {
        api_urls: ApiUrls::for_product(base_url, model.id),
        id: model.id,
        brand_name: model.brand_name,
        product_name: model.product_name,
        image_url: model.image_url,
        price: format_price(model.price),
        discount: format_discount(model.discount),
        likes: model.likes,
        reviews: model.reviews,
        is_favorite: model.is_favorite,
        category: model.category,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

pub fn product_views(base_url: &str, models: Vec<products::Model>) -> Vec<ProductView> {
    models
        .into_iter()
        .map(|model| product_view(base_url, model))
        .collect()
}
