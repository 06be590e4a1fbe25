// tests/support/builders.rs
use article_service::domain::article::{Article, ArticleId, ArticleStatus};
use serde_json::{Value, json};

use super::mocks::fixed_now;

pub const VALID_TITLE: &str = "A sufficiently long title";

pub fn valid_content() -> String {
    "Lorem ipsum dolor sit amet. ".repeat(8)
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    category: String,
    status: ArticleStatus,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: VALID_TITLE.into(),
            content: valid_content(),
            category: "Technology".into(),
            status: ArticleStatus::Draft,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId(self.id),
            title: self.title,
            content: self.content,
            category: self.category,
            status: self.status,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

/// 作成APIに渡す妥当なJSONボディ
pub fn valid_create_body(status: &str) -> Value {
    json!({
        "title": VALID_TITLE,
        "content": valid_content(),
        "category": "Technology",
        "status": status,
    })
}
