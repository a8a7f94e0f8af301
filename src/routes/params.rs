use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductPageQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub category: Option<String>,
}

impl ProductPageQuery {
    pub fn normalize(&self) -> (u64, u64) {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(20).clamp(1, 100);
        (offset, limit)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActionQuery {
    pub user_id: Option<i64>,
    pub quantity: Option<i32>,
}

impl ActionQuery {
    pub fn normalize(&self) -> (i64, i32) {
        (self.user_id.unwrap_or(1), self.quantity.unwrap_or(1))
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserQuery {
    pub user_id: Option<i64>,
}

impl UserQuery {
    pub fn normalize(&self) -> i64 {
        self.user_id.unwrap_or(1)
    }
}

/// `user_id` stays optional here: no filter means all users.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CartQuery {
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecentViewsQuery {
    pub user_id: Option<i64>,
    pub limit: Option<u64>,
}

impl RecentViewsQuery {
    pub fn normalize(&self) -> (i64, u64) {
        (self.user_id.unwrap_or(1), self.limit.unwrap_or(50).clamp(1, 200))
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TermsQuery {
    pub limit: Option<usize>,
}

impl TermsQuery {
    pub fn normalize(&self) -> usize {
        self.limit.unwrap_or(10)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Action token of the unified product endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Get,
    Favorite,
    CartAdd,
    CartRemove,
    CartUpdate,
}

impl ProductAction {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "get" => Some(Self::Get),
            "favorite" => Some(Self::Favorite),
            "cart-add" => Some(Self::CartAdd),
            "cart-remove" => Some(Self::CartRemove),
            "cart-update" => Some(Self::CartUpdate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_action_tokens_parse() {
        assert_eq!(ProductAction::parse("get"), Some(ProductAction::Get));
        assert_eq!(ProductAction::parse("favorite"), Some(ProductAction::Favorite));
        assert_eq!(ProductAction::parse("cart-add"), Some(ProductAction::CartAdd));
        assert_eq!(
            ProductAction::parse("cart-remove"),
            Some(ProductAction::CartRemove)
        );
        assert_eq!(
            ProductAction::parse("cart-update"),
            Some(ProductAction::CartUpdate)
        );
    }

    #[test]
    fn unknown_action_tokens_are_rejected() {
        assert_eq!(ProductAction::parse("checkout"), None);
        assert_eq!(ProductAction::parse("CART-ADD"), None);
        assert_eq!(ProductAction::parse(""), None);
    }

    #[test]
    fn page_query_defaults_and_clamps() {
        let query = ProductPageQuery {
            offset: None,
            limit: None,
            category: None,
        };
        assert_eq!(query.normalize(), (0, 20));

        let query = ProductPageQuery {
            offset: Some(40),
            limit: Some(1000),
            category: None,
        };
        assert_eq!(query.normalize(), (40, 100));
    }

    #[test]
    fn action_query_defaults_to_user_one_quantity_one() {
        let query = ActionQuery {
            user_id: None,
            quantity: None,
        };
        assert_eq!(query.normalize(), (1, 1));
    }

    #[test]
    fn recent_views_query_defaults() {
        let query = RecentViewsQuery {
            user_id: None,
            limit: None,
        };
        assert_eq!(query.normalize(), (1, 50));
    }
}
