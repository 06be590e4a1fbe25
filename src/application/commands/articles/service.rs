// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) fn parse_id(raw: &str) -> ApplicationResult<ArticleId> {
        ArticleId::parse(raw).map_err(|_| ApplicationError::invalid_id(raw))
    }

    pub(super) async fn require_existing(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
