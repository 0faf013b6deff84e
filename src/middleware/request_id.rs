use axum::{
    body::Body, extract::Request, http::HeaderValue, middleware::Next, response::Response,
};
use uuid::Uuid;

/// HTTP header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension type carrying the id of the request being handled
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stamps each request with an id and echoes it on the response.
///
/// An incoming `x-request-id` header is reused when it parses as a UUID;
/// otherwise a fresh one is generated.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4);

    request.extensions_mut().insert(RequestId(request_id));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

/// Span constructor for the HTTP trace layer, tagging spans with the request id
pub fn make_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
