//! JSON body extractor whose rejection is an `AppError`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but any failure to read or deserialize the body becomes
/// `AppError::MalformedBody`, except bodies over the configured limit.
#[derive(Debug, Clone)]
pub struct BookJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BookJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(BookJson(value)),
            Err(rejection) => Err(malformed(rejection)),
        }
    }
}

fn malformed(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(rejection.body_text());
    }
    AppError::MalformedBody(rejection.body_text())
}
