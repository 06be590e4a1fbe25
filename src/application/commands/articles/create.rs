// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, NewArticle},
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    command: CreateArticleCommand,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.command.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.command.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.command.status = Some(status.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        self.command
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft = ArticleDraft {
            title: command.title,
            content: command.content,
            category: command.category,
            status: command.status,
        }
        .validate()
        .map_err(ApplicationError::validation)?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewArticle {
                title: draft.title,
                content: draft.content,
                category: draft.category,
                status: draft.status,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(article_id = %created.id, status = %created.status, "article created");
        Ok(created.into())
    }
}
