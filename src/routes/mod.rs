use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span, request_id_middleware};
use crate::state::AppState;

pub mod movies;
pub mod watchlist;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Movies
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/top-rated", get(movies::top_rated))
        .route("/movies/recently-added", get(movies::recently_added))
        .route(
            "/movies/:id",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::remove),
        )
        .route("/movies-by-email", get(movies::by_email))
        // Watchlist
        .route(
            "/watchlist",
            get(watchlist::list_by_query).post(watchlist::add),
        )
        // GET takes an email, DELETE a movie id; the UI uses both shapes
        .route(
            "/watchlist/:key",
            get(watchlist::list_by_path).delete(watchlist::remove),
        )
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
