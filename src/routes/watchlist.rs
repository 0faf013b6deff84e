use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::{AddWatchlistRequest, WatchlistMovie};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailParams {
    email: String,
}

/// Add a movie to a user's watchlist
pub async fn add(
    State(state): State<AppState>,
    AppJson(request): AppJson<AddWatchlistRequest>,
) -> AppResult<(StatusCode, Json<AddWatchlistRequest>)> {
    state
        .catalog
        .add_to_watchlist(&request.user_email, request.movie_id)
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Materialized watchlist, addressed as `/watchlist/{email}`
pub async fn list_by_path(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<WatchlistMovie>>> {
    Ok(Json(state.catalog.list_watchlist(&email).await?))
}

/// Materialized watchlist, addressed as `/watchlist?email=`
pub async fn list_by_query(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> AppResult<Json<Vec<WatchlistMovie>>> {
    Ok(Json(state.catalog.list_watchlist(&params.email).await?))
}

/// Remove a movie from a user's watchlist
///
/// The path segment is the movie id here, not an email; the route is
/// shared with [`list_by_path`], so the id is parsed by hand to keep the
/// error typed.
pub async fn remove(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<EmailParams>,
) -> AppResult<Json<Value>> {
    let movie_id = Uuid::parse_str(&key)
        .map_err(|_| AppError::Validation(format!("invalid movie id: {}", key)))?;

    let deleted = state
        .catalog
        .remove_from_watchlist(&params.email, movie_id)
        .await?;
    Ok(Json(json!({ "deletedCount": deleted })))
}
