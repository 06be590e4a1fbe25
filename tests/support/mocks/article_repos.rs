// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use article_service::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle, PageWindow,
};
use article_service::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// 指定されたフィールドだけを上書きし、updated_atを進める
fn apply_staged(article: &mut Article, update: &ArticleUpdate) {
    if let Some(title) = &update.title {
        article.title.clone_from(title);
    }
    if let Some(content) = &update.content {
        article.content.clone_from(content);
    }
    if let Some(category) = &update.category {
        article.category.clone_from(category);
    }
    if let Some(status) = update.status {
        article.status = status;
    }
    article.updated_at = update.updated_at;
}

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// インメモリの記事リポジトリ（読み書き両対応）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<BTreeMap<i64, Article>>,
    last_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let last_id = articles.iter().map(|a| a.id.0).max().unwrap_or(0);
        let rows = articles.into_iter().map(|a| (a.id.0, a)).collect();
        Self {
            rows: Mutex::new(rows),
            last_id: AtomicI64::new(last_id),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn remove(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().remove(&id)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Article {
            id: ArticleId(id),
            title: article.title,
            content: article.content,
            category: article.category,
            status: article.status,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.rows.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        apply_staged(article, &update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.remove(id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id.0))
    }

    async fn list_page(
        &self,
        status: Option<ArticleStatus>,
        window: PageWindow,
    ) -> DomainResult<Vec<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .skip(to_usize(window.offset))
            .take(to_usize(window.limit))
            .cloned()
            .collect())
    }

    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count() as u64)
    }
}

/* -------------------------------- ConcurrentlyDeletedRepo -------------------------------- */

/// 存在確認の直後に別リクエストが行を削除した状況を再現するリポジトリ
pub struct ConcurrentlyDeletedRepo {
    pub inner: InMemoryArticleRepo,
}

#[async_trait]
impl ArticleWriteRepository for ConcurrentlyDeletedRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inner.insert(article).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.inner.remove(update.id.0);
        self.inner.update(update).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.remove(id.0);
        self.inner.delete(id).await
    }
}

#[async_trait]
impl ArticleReadRepository for ConcurrentlyDeletedRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.inner.find_by_id(id).await
    }

    async fn list_page(
        &self,
        status: Option<ArticleStatus>,
        window: PageWindow,
    ) -> DomainResult<Vec<Article>> {
        self.inner.list_page(status, window).await
    }

    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64> {
        self.inner.count(status).await
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての呼び出しが永続化エラーになるリポジトリ
pub struct FailingArticleRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        unavailable()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn list_page(
        &self,
        _status: Option<ArticleStatus>,
        _window: PageWindow,
    ) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn count(&self, _status: Option<ArticleStatus>) -> DomainResult<u64> {
        unavailable()
    }
}
