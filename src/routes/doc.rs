use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::actions::ActionSummary,
    dto::cart::{AddToCartRequest, CartItemView, CartList, UpdateCartItemRequest},
    dto::products::{
        ApiUrls, CreateProductRequest, ProductList, ProductView, UpdateProductRequest,
    },
    dto::qa::{CreateQaRequest, UpdateQaRequest},
    dto::reviews::{CreateReviewRequest, UpdateReviewRequest},
    dto::user::CartAndFavorites,
    response::{Envelope, EnvelopeHeader},
    routes::{actions, cart, health, params, products, search},
    search_terms::{SearchTerm, Trend},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        products::list_products,
        products::list_all_products,
        products::get_product,
        products::favorite_products,
        products::ranking,
        products::recent_views,
        actions::unified_action,
        cart::cart_items,
        cart::cart_and_favorites,
        search::search_products,
        search::popular_terms,
    ),
    components(
        schemas(
            ApiUrls,
            ProductView,
            ProductList,
            CreateProductRequest,
            UpdateProductRequest,
            CartItemView,
            CartList,
            AddToCartRequest,
            UpdateCartItemRequest,
            CreateQaRequest,
            UpdateQaRequest,
            CreateReviewRequest,
            UpdateReviewRequest,
            CartAndFavorites,
            ActionSummary,
            SearchTerm,
            Trend,
            search::SearchTermList,
            health::HealthData,
            params::ProductPageQuery,
            params::ActionQuery,
            params::RecentViewsQuery,
            EnvelopeHeader,
            Envelope<ProductView>,
            Envelope<ProductList>,
            Envelope<CartList>,
            Envelope<CartAndFavorites>,
            Envelope<ActionSummary>,
            Envelope<search::SearchTermList>,
            Envelope<health::HealthData>,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Products", description = "Catalog browsing"),
        (name = "Actions", description = "Unified product action endpoint"),
        (name = "Cart", description = "Cart and per-user data"),
        (name = "Search", description = "Search and popular terms"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
