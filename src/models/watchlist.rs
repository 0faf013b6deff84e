use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Movie;

/// Request body for adding a movie to a watchlist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistRequest {
    pub user_email: String,
    pub movie_id: Uuid,
}

/// A watchlist entry materialized against the movie store
///
/// Carries the full movie record plus the `movieId` the entry was keyed on;
/// the frontend reads both (`item.movieId` on the details page, the movie
/// fields on the watchlist page).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistMovie {
    pub movie_id: Uuid,
    #[serde(flatten)]
    pub movie: Movie,
}

impl WatchlistMovie {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie_id: movie.id,
            movie,
        }
    }
}
