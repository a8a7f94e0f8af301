use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::products::ProductList,
    error::AppResult,
    response::Envelope,
    routes::params::{SearchQuery, TermsQuery},
    search_terms::SearchTerm,
    services::product_service,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SearchTermList {
    #[schema(value_type = Vec<SearchTerm>)]
    pub items: Vec<SearchTerm>,
}

#[utoipa::path(
    get,
    path = "/products-search",
    params(
        ("q" = Option<String>, Query, description = "Search text; empty returns no results"),
    ),
    responses(
        (status = 200, description = "Products matching name or brand", body = Envelope<ProductList>)
    ),
    tag = "Search"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Envelope<ProductList>>> {
    let q = query.q.unwrap_or_default();
    let items = product_service::search_products(&state, &q).await?;

    let message = if q.trim().is_empty() {
        "Empty search query"
    } else {
        "Search results"
    };
    Ok(Json(Envelope::ok(message, ProductList { items })))
}

#[utoipa::path(
    get,
    path = "/popular-search-terms",
    params(
        ("limit" = Option<usize>, Query, description = "Max terms, default 10"),
    ),
    responses(
        (status = 200, description = "Ranked search terms", body = Envelope<SearchTermList>)
    ),
    tag = "Search"
)]
pub async fn popular_terms(
    State(state): State<AppState>,
    Query(query): Query<TermsQuery>,
) -> Json<Envelope<SearchTermList>> {
    let items = state.search_terms.top_terms(query.normalize());
    Json(Envelope::ok(
        "Popular search terms",
        SearchTermList { items },
    ))
}
