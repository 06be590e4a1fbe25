use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, resolve_page},
        error::ApplicationResult,
    },
    domain::article::ArticleStatus,
};

#[derive(Debug, Clone)]
pub struct ListArticlesByStatusQuery {
    pub status: ArticleStatus,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ArticleQueryService {
    /// Bare page of one status. Unlike `list_articles` no total is returned;
    /// existing clients consume a plain array here.
    pub async fn list_articles_by_status(
        &self,
        query: ListArticlesByStatusQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let window = resolve_page(query.limit.as_deref(), query.offset.as_deref());
        tracing::debug!(
            status = %query.status,
            limit = window.limit,
            offset = window.offset,
            "listing articles by status"
        );

        let records = self.read_repo.list_page(Some(query.status), window).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
