use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::search_terms::{SearchTermProvider, StaticSearchTerms};

/// Shared per-process handles, injected into every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    /// Base URL embedded in product action links.
    pub base_url: String,
    pub search_terms: Arc<dyn SearchTermProvider>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, base_url: impl Into<String>) -> Self {
        Self {
            orm,
            base_url: base_url.into(),
            search_terms: Arc::new(StaticSearchTerms::default()),
        }
    }

    pub fn with_search_terms(mut self, provider: Arc<dyn SearchTermProvider>) -> Self {
        self.search_terms = provider;
        self
    }
}
