use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Wire shape of a persisted article. Field names are part of the client contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    /// One of `Publish`, `Draft`, `Thrash`.
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            category: article.category,
            status: article.status.as_str().to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
