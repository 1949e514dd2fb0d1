//! Request extractors with project-specific rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::{AppError, MALFORMED_BODY_MESSAGE};

/// JSON body extractor that rejects with [`AppError`].
///
/// The body is decoded whatever the `Content-Type` header says. Only a body
/// that cannot be read or is not valid JSON of the expected shape is
/// rejected, always as a 400 with the usual `{ "error": ... }` body.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "Failed to read request body");
            AppError::BadRequest(MALFORMED_BODY_MESSAGE.to_string())
        })?;

        let axum::Json(value) = axum::Json::<T>::from_bytes(&bytes)?;
        Ok(AppJson(value))
    }
}
