// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::ApplicationResult;

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = Self::parse_id(&command.id)?;
        self.require_existing(id).await?;

        // A row removed concurrently since the check surfaces as NotFound.
        self.write_repo.delete(id).await?;

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
