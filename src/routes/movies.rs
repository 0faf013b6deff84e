use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::Identity;
use crate::models::{Movie, MovieDraft};
use crate::services::filter::{MovieQuery, RECENTLY_ADDED_LIMIT, TOP_RATED_LIMIT};
use crate::state::AppState;

/// Query parameters for the list/filter endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    title: Option<String>,
    /// Comma-separated genre values
    genres: Option<String>,
    rating_min: Option<f64>,
    rating_max: Option<f64>,
}

impl MovieListParams {
    fn into_query(self) -> MovieQuery {
        MovieQuery {
            title_contains: self.title.filter(|t| !t.trim().is_empty()),
            genres: self
                .genres
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|g| !g.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            rating_min: self.rating_min,
            rating_max: self.rating_max,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct EmailParams {
    email: String,
}

/// List or filter the catalog
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> Json<Vec<Movie>> {
    Json(state.catalog.list_movies(&params.into_query()).await)
}

/// Highest-rated movies for the home page
pub async fn top_rated(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<Movie>> {
    let limit = params.limit.unwrap_or(TOP_RATED_LIMIT);
    Json(state.catalog.top_rated(limit).await)
}

/// Most recently released movies for the home page
pub async fn recently_added(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<Movie>> {
    let limit = params.limit.unwrap_or(RECENTLY_ADDED_LIMIT);
    Json(state.catalog.recently_added(limit).await)
}

/// Fetch a single movie
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Movie>> {
    Ok(Json(state.catalog.get_movie(id).await?))
}

/// Movies created by the given identity
pub async fn by_email(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Json<Vec<Movie>> {
    Json(state.catalog.movies_by_owner(&params.email).await)
}

/// Create a movie, owned by the authenticated caller
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    AppJson(draft): AppJson<MovieDraft>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = state.catalog.add_movie(identity.as_str(), draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "insertedId": id }))))
}

/// Replace a movie's fields, owner only
pub async fn update(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    AppJson(draft): AppJson<MovieDraft>,
) -> AppResult<Json<Value>> {
    state
        .catalog
        .update_movie(identity.as_str(), id, draft)
        .await?;
    Ok(Json(json!({ "modifiedCount": 1 })))
}

/// Delete a movie, owner only; cascades to watchlists
pub async fn remove(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let deleted = state.catalog.delete_movie(identity.as_str(), id).await?;
    Ok(Json(json!({ "deletedCount": deleted })))
}
