use super::{ArticleQueryService, ListArticlesByStatusQuery, RouteIntent};
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct ResolveArticleParamQuery {
    pub token: String,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ArticleLookup {
    Single(ArticleDto),
    ByStatus(Vec<ArticleDto>),
}

impl ArticleQueryService {
    /// Routes `/article/{token}` to a status listing or an id lookup.
    pub async fn resolve_article_param(
        &self,
        query: ResolveArticleParamQuery,
    ) -> ApplicationResult<ArticleLookup> {
        match RouteIntent::resolve(&query.token) {
            RouteIntent::StatusFilter(status) => self
                .list_articles_by_status(ListArticlesByStatusQuery {
                    status,
                    limit: query.limit,
                    offset: query.offset,
                })
                .await
                .map(ArticleLookup::ByStatus),
            RouteIntent::IdLookup(id) => self.find_article(id).await.map(ArticleLookup::Single),
            RouteIntent::Invalid(token) => Err(ApplicationError::invalid_parameter(token)),
        }
    }
}
