// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{ArticleLookup, ListArticlesQuery, ResolveArticleParamQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PageQuery};
use crate::presentation::http::openapi::ArticlePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Documented pagination parameters, read at runtime by [`PageQuery`].
/// Resolution to defaults happens in the application layer.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page size; values below 1 or unparsable fall back to 10.
    pub limit: Option<String>,
    /// Rows to skip; negative or unparsable values fall back to 0.
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Partial update. Keys that are missing, or whose value is not a JSON
/// string, leave the stored field unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default, deserialize_with = "text_or_absent")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_absent")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "text_or_absent")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "text_or_absent")]
    pub status: Option<String>,
}

fn text_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub data: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Validation failed or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        category: payload.category,
        status: payload.status,
    };

    let data = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { data })))
}

#[utoipa::path(
    get,
    path = "/article",
    params(PageParams),
    responses(
        (status = 200, description = "Page of articles with the total count.", body = ArticlePageResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: PageQuery,
) -> HttpResult<Json<ArticlePageResponse>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

/// `param` is either a status (`Publish`, `Draft`, `Thrash`), answered with a
/// bare array of articles, or a numeric id, answered with a bare article.
#[utoipa::path(
    get,
    path = "/article/{param}",
    params(
        ("param" = String, Path, description = "Status name or numeric article id."),
        PageParams
    ),
    responses(
        (status = 200, description = "Array of articles for a status, or the single article for an id.", body = ArticleDto),
        (status = 400, description = "Neither a status nor an integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_or_status(
    Extension(state): Extension<HttpState>,
    Path(param): Path<String>,
    params: PageQuery,
) -> HttpResult<Response> {
    let lookup = state
        .services
        .article_queries
        .resolve_article_param(ResolveArticleParamQuery {
            token: param,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()?;

    Ok(match lookup {
        ArticleLookup::Single(article) => Json(article).into_response(),
        ArticleLookup::ByStatus(articles) => Json(articles).into_response(),
    })
}

#[utoipa::path(
    put,
    path = "/article/{id}",
    params(("id" = String, Path, description = "Article id.")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article after the update.", body = ArticleResponse),
        (status = 400, description = "Invalid id, invalid status or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        category: payload.category,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(|data| Json(ArticleResponse { data }))
}

#[utoipa::path(
    delete,
    path = "/article/{id}",
    params(("id" = String, Path, description = "Article id.")),
    responses(
        (status = 200, description = "Article deleted.", body = MessageResponse),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "Article deleted successfully".into(),
    }))
}
