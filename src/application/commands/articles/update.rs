use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleUpdate, parse_status},
};

/// Partial update. Text fields are written as given; only `status` is checked.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            category,
            status,
        } = command;

        let id = Self::parse_id(&id)?;
        let status = status
            .as_deref()
            .map(parse_status)
            .transpose()
            .map_err(|err| ApplicationError::validation(vec![err]))?;

        let existing = self.require_existing(id).await?;

        let now = self.clock.now().max(existing.created_at);
        let mut update = ArticleUpdate::new(id, now);
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        if let Some(status) = status {
            update = update.with_status(status);
        }

        self.write_repo.update(update).await?;

        // Re-read so storage-side defaults are reflected.
        let updated = self.require_existing(id).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(updated.into())
    }
}
