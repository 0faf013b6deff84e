use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `Json<T>` wrapper that converts body rejections into validation errors,
/// so malformed input surfaces as the same `{"error": ...}` shape as every
/// other failure.
pub struct AppJson<T>(pub T);

#[async_trait::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(AppJson(value))
    }
}
