// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// `Json<T>` whose rejection is rendered as the API's own error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                HttpError::bad_request(format!("invalid JSON format: {}", rejection.body_text()))
            })
    }
}

/// Raw `limit` / `offset` query values. A repeated key keeps its first value
/// and other keys are ignored, so pagination never rejects a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut page = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "limit" if page.limit.is_none() => page.limit = Some(value),
                "offset" if page.offset.is_none() => page.offset = Some(value),
                _ => {}
            }
        }
        page
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                HttpError::bad_request(format!("invalid query string: {}", rejection.body_text()))
            })?;
        Ok(Self::from_pairs(pairs))
    }
}
