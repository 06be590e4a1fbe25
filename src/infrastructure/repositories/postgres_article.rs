// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle, PageWindow,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, content, category, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<ArticleStatus>().map_err(|_| {
            DomainError::Persistence(format!("unexpected status in storage: {}", row.status))
        })?;

        Ok(Article {
            id: ArticleId(row.id),
            title: row.title,
            content: row.content,
            category: row.category,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_status_filter(builder: &mut QueryBuilder<'_, Postgres>, status: Option<ArticleStatus>) {
    if let Some(status) = status {
        builder.push(" WHERE status = ");
        builder.push_bind(status.as_str());
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            category,
            status,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, category, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .bind(category)
        .bind(status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            category,
            status,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title);
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content);
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        status: Option<ArticleStatus>,
        window: PageWindow,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        push_status_filter(&mut builder, status);
        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(window.limit);
        builder.push(" OFFSET ");
        builder.push_bind(window.offset);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, status: Option<ArticleStatus>) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        push_status_filter(&mut builder, status);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total)
            .map_err(|_| DomainError::Persistence(format!("negative row count: {total}")))
    }
}
