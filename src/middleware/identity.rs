use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// HTTP header carrying the verified caller identity
///
/// The identity provider sits in front of this service and forwards the
/// authenticated user's email here; the value is trusted as an opaque,
/// already-verified string.
pub const IDENTITY_HEADER: &str = "x-user-email";

/// The authenticated caller's identity, extracted from the request headers
#[derive(Clone, Debug)]
pub struct Identity(pub String);

impl Identity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Identity(value.to_string()))
            .ok_or(AppError::MissingIdentity)
    }
}
