use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Movie, MovieDraft, WatchlistMovie};
use crate::services::filter::{self, MovieQuery};
use crate::store::{AddOutcome, MovieStore, WatchlistLedger};

/// The catalog & watchlist service
///
/// Central authority for every externally callable operation: input
/// validation, the ownership guard, and the membership invariant all live
/// here rather than being re-derived per handler. The caller identity is
/// always an explicit argument; nothing is read from ambient state.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<RwLock<CatalogInner>>,
}

/// Store and ledger behind a single lock, so a delete cascade and the
/// watchlist check-then-insert each run as one atomic critical section.
struct CatalogInner {
    movies: MovieStore,
    watchlist: WatchlistLedger,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogInner {
                movies: MovieStore::new(),
                watchlist: WatchlistLedger::new(),
            })),
        }
    }

    // Movie operations

    /// Lists movies matching the query, in catalog insertion order
    pub async fn list_movies(&self, query: &MovieQuery) -> Vec<Movie> {
        let inner = self.inner.read().await;
        filter::filter(&inner.movies.list_all(), query)
    }

    /// The highest-rated movies, for the home page rail
    pub async fn top_rated(&self, limit: usize) -> Vec<Movie> {
        let inner = self.inner.read().await;
        filter::top_rated(&inner.movies.list_all(), limit)
    }

    /// The most recently released movies, for the home page rail
    pub async fn recently_added(&self, limit: usize) -> Vec<Movie> {
        let inner = self.inner.read().await;
        filter::recently_added(&inner.movies.list_all(), limit)
    }

    pub async fn get_movie(&self, id: Uuid) -> AppResult<Movie> {
        let inner = self.inner.read().await;
        inner
            .movies
            .get(&id)
            .cloned()
            .ok_or_else(|| movie_not_found(id))
    }

    /// Movies created by this identity
    pub async fn movies_by_owner(&self, email: &str) -> Vec<Movie> {
        let inner = self.inner.read().await;
        inner
            .movies
            .list_all()
            .into_iter()
            .filter(|movie| movie.is_added_by(email))
            .collect()
    }

    /// Validates the draft and inserts it, stamping the caller as owner
    pub async fn add_movie(&self, identity: &str, draft: MovieDraft) -> AppResult<Uuid> {
        draft.validate()?;

        let mut inner = self.inner.write().await;
        let id = inner.movies.insert(Movie::new(draft, identity));
        tracing::info!(movie_id = %id, added_by = %identity, "Movie added");
        Ok(id)
    }

    /// Replaces a movie's fields, owner only
    ///
    /// Existence is checked before ownership so callers can distinguish
    /// "no such movie" from "not yours".
    pub async fn update_movie(&self, identity: &str, id: Uuid, draft: MovieDraft) -> AppResult<()> {
        draft.validate()?;

        let mut inner = self.inner.write().await;
        let movie = inner.movies.get(&id).ok_or_else(|| movie_not_found(id))?;
        if !movie.is_added_by(identity) {
            return Err(not_the_owner());
        }

        inner.movies.replace(&id, draft);
        tracing::info!(movie_id = %id, "Movie updated");
        Ok(())
    }

    /// Deletes a movie, owner only, cascading to every user's watchlist
    pub async fn delete_movie(&self, identity: &str, id: Uuid) -> AppResult<usize> {
        let mut inner = self.inner.write().await;
        let movie = inner.movies.get(&id).ok_or_else(|| movie_not_found(id))?;
        if !movie.is_added_by(identity) {
            return Err(not_the_owner());
        }

        let removed = inner.movies.remove(&id);
        let purged = inner.watchlist.purge_movie(&id);
        tracing::info!(movie_id = %id, watchlist_entries = purged, "Movie deleted");
        Ok(removed)
    }

    // Watchlist operations

    /// Adds a movie to the caller's watchlist
    ///
    /// The movie must exist, and the membership check and insert run under
    /// one write-lock acquisition, so two concurrent adds for the same pair
    /// cannot both observe absence.
    pub async fn add_to_watchlist(&self, identity: &str, movie_id: Uuid) -> AppResult<()> {
        let identity = require_identity(identity)?;

        let mut inner = self.inner.write().await;
        if inner.movies.get(&movie_id).is_none() {
            return Err(movie_not_found(movie_id));
        }

        match inner.watchlist.add(identity, movie_id) {
            AddOutcome::Created => {
                tracing::info!(movie_id = %movie_id, user = %identity, "Watchlist entry added");
                Ok(())
            }
            AddOutcome::AlreadyExists => Err(AppError::Conflict(
                "movie is already in this watchlist".to_string(),
            )),
        }
    }

    /// Removes a movie from the caller's watchlist; absent pairs count 0
    pub async fn remove_from_watchlist(&self, identity: &str, movie_id: Uuid) -> AppResult<usize> {
        let identity = require_identity(identity)?;

        let mut inner = self.inner.write().await;
        Ok(inner.watchlist.remove(identity, &movie_id))
    }

    /// The caller's watchlist, materialized against the movie store
    ///
    /// Entries whose movie no longer resolves are dropped, not reported.
    pub async fn list_watchlist(&self, identity: &str) -> AppResult<Vec<WatchlistMovie>> {
        let identity = require_identity(identity)?;

        let inner = self.inner.read().await;
        Ok(inner
            .watchlist
            .list_for(identity)
            .into_iter()
            .filter_map(|movie_id| inner.movies.get(&movie_id).cloned())
            .map(WatchlistMovie::new)
            .collect())
    }

    /// Whether the pair is currently a watchlist member
    pub async fn is_listed(&self, identity: &str, movie_id: Uuid) -> bool {
        let inner = self.inner.read().await;
        inner.watchlist.is_member(identity, &movie_id)
    }
}

fn movie_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("movie {} not found", id))
}

fn not_the_owner() -> AppError {
    AppError::Forbidden("only the user who added this movie can modify it".to_string())
}

fn require_identity(identity: &str) -> AppResult<&str> {
    let trimmed = identity.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("email must not be empty".to_string()));
    }
    Ok(trimmed)
}
