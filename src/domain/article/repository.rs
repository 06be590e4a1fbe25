use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, PageWindow};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when no row matched.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when no row matched.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Rows in ascending id order, optionally restricted to one status.
    async fn list_page(
        &self,
        status: Option<ArticleStatus>,
        window: PageWindow,
    ) -> DomainResult<Vec<Article>>;
    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64>;
}
