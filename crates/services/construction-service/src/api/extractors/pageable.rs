//! Pagination query extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::Query;

use common::pagination::PageQuery;
use common::{AppError, PageRequest};

/// Page request parsed from `page`, `size` and repeated `sort` parameters.
pub struct Pageable(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pageable
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.to_string()))?;

        PageRequest::try_from(query).map(Pageable)
    }
}
