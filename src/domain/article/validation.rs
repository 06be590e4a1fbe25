// src/domain/article/validation.rs
use crate::domain::article::value_objects::ArticleStatus;

pub const TITLE_MIN_CHARS: usize = 20;
pub const CONTENT_MIN_CHARS: usize = 200;
pub const CATEGORY_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Unvalidated create payload. A missing key and an empty string are both "absent".
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidArticleDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
}

impl ArticleDraft {
    /// Checks every field and reports all violations together.
    pub fn validate(self) -> Result<ValidArticleDraft, Vec<FieldError>> {
        let title = required_text("title", "Title", self.title, TITLE_MIN_CHARS);
        let content = required_text("content", "Content", self.content, CONTENT_MIN_CHARS);
        let category = required_text("category", "Category", self.category, CATEGORY_MIN_CHARS);
        let status = match self.status.filter(|s| !s.is_empty()) {
            Some(raw) => parse_status(&raw),
            None => Err(FieldError::new("status", "Status is required")),
        };

        match (title, content, category, status) {
            (Ok(title), Ok(content), Ok(category), Ok(status)) => Ok(ValidArticleDraft {
                title,
                content,
                category,
                status,
            }),
            (title, content, category, status) => Err([
                title.err(),
                content.err(),
                category.err(),
                status.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

/// Field errors for `draft`; empty means valid.
pub fn validate_draft(draft: &ArticleDraft) -> Vec<FieldError> {
    draft.clone().validate().err().unwrap_or_default()
}

/// The only check a partial update performs.
pub fn parse_status(raw: &str) -> Result<ArticleStatus, FieldError> {
    raw.parse::<ArticleStatus>()
        .map_err(|_| FieldError::new("status", "Status must be Publish, Draft, or Thrash"))
}

fn required_text(
    field: &'static str,
    label: &str,
    value: Option<String>,
    min_chars: usize,
) -> Result<String, FieldError> {
    match value.filter(|v| !v.is_empty()) {
        None => Err(FieldError::new(field, format!("{label} is required"))),
        Some(v) if v.chars().count() < min_chars => Err(FieldError::new(
            field,
            format!("{label} must be at least {min_chars} characters"),
        )),
        Some(v) => Ok(v),
    }
}
