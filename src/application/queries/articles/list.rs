use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, OffsetPage, resolve_page},
    error::ApplicationResult,
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ArticleQueryService {
    /// Unfiltered page plus the total row count.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let window = resolve_page(query.limit.as_deref(), query.offset.as_deref());
        tracing::debug!(limit = window.limit, offset = window.offset, "listing articles");

        let records = self.read_repo.list_page(None, window).await?;
        let total = self.read_repo.count(None).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, total, window))
    }
}
