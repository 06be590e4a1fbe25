// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, OffsetPage};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Schema of the unfiltered listing: one page plus the total row count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticlePageResponse {
    pub data: Vec<ArticleDto>,
    pub total: u64,
    pub limit: i64,
    pub offset: i64,
}

impl From<OffsetPage<ArticleDto>> for ArticlePageResponse {
    fn from(page: OffsetPage<ArticleDto>) -> Self {
        Self {
            data: page.data,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_or_status,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticlePageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::FieldErrorBody,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::articles::MessageResponse,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Article Service API",
        description = "CRUD backend for articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
