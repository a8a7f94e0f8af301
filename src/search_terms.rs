//! Ranked popular-search-terms source. Handlers only see the trait, so a
//! real ranking backend can replace the static list without route changes.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SearchTerm {
    pub term: String,
    pub count: i64,
    pub trend: Trend,
}

impl SearchTerm {
    fn new(term: &str, count: i64, trend: Trend) -> Self {
        Self {
            term: term.to_string(),
            count,
            trend,
        }
    }
}

pub trait SearchTermProvider: Send + Sync {
    /// Terms ranked by popularity, truncated to `limit`.
    fn top_terms(&self, limit: usize) -> Vec<SearchTerm>;
}

pub struct StaticSearchTerms {
    terms: Vec<SearchTerm>,
}

impl StaticSearchTerms {
    pub fn new(terms: Vec<SearchTerm>) -> Self {
        Self { terms }
    }
}

impl Default for StaticSearchTerms {
    fn default() -> Self {
        Self::new(vec![
            SearchTerm::new("나이키", 156, Trend::Up),
            SearchTerm::new("아디다스", 134, Trend::Up),
            SearchTerm::new("반팔티", 98, Trend::Down),
            SearchTerm::new("청바지", 87, Trend::Up),
            SearchTerm::new("운동화", 76, Trend::Up),
            SearchTerm::new("후드티", 65, Trend::Down),
            SearchTerm::new("가방", 54, Trend::Up),
            SearchTerm::new("시계", 43, Trend::Up),
            SearchTerm::new("신발", 38, Trend::Down),
            SearchTerm::new("액세서리", 32, Trend::Up),
        ])
    }
}

impl SearchTermProvider for StaticSearchTerms {
    fn top_terms(&self, limit: usize) -> Vec<SearchTerm> {
        self.terms.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_is_ranked_by_count() {
        let provider = StaticSearchTerms::default();
        let terms = provider.top_terms(usize::MAX);
        assert_eq!(terms.len(), 10);
        assert!(terms.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn limit_truncates_the_list() {
        let provider = StaticSearchTerms::default();
        let terms = provider.top_terms(3);
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].term, "나이키");
    }

    #[test]
    fn oversized_limit_returns_everything() {
        let provider = StaticSearchTerms::default();
        assert_eq!(provider.top_terms(100).len(), 10);
    }
}
