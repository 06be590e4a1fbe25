use crate::domain::article::{ArticleId, ArticleStatus};

/// Meaning of the single path token under `/article/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteIntent {
    StatusFilter(ArticleStatus),
    IdLookup(ArticleId),
    Invalid(String),
}

impl RouteIntent {
    /// Exact status name first, then a base-10 integer. Nothing else.
    pub fn resolve(token: &str) -> Self {
        if let Ok(status) = token.parse::<ArticleStatus>() {
            return Self::StatusFilter(status);
        }
        match ArticleId::parse(token) {
            Ok(id) => Self::IdLookup(id),
            Err(_) => Self::Invalid(token.to_string()),
        }
    }
}
