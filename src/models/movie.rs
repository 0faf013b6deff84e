use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Lowest rating a movie can carry
pub const RATING_FLOOR: f64 = 0.0;
/// Highest rating a movie can carry
pub const RATING_CEILING: f64 = 10.0;

/// A movie record in the catalog
///
/// The identifier serializes as `_id` and the remaining fields as camelCase,
/// matching the wire format the MovieMaster Pro frontend reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier, assigned at creation and stable for the record's lifetime
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: f64,
    /// Runtime in minutes
    pub duration: u32,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub plot_summary: String,
    pub poster_url: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    /// Identity of the creating user; immutable after creation
    pub added_by: String,
    /// When the record entered the catalog
    pub created_at: DateTime<Utc>,
}

impl Movie {
    /// Creates a new movie record from validated draft fields
    ///
    /// The identifier and creation timestamp are assigned here; `added_by`
    /// comes from the authenticated caller, never from the draft.
    pub fn new(draft: MovieDraft, added_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            genre: draft.genre,
            release_year: draft.release_year,
            rating: draft.rating,
            duration: draft.duration,
            director: draft.director,
            cast: draft.cast,
            plot_summary: draft.plot_summary,
            poster_url: draft.poster_url,
            language: draft.language,
            country: draft.country,
            added_by: added_by.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether `identity` created this record and may therefore mutate it
    pub fn is_added_by(&self, identity: &str) -> bool {
        self.added_by == identity
    }

    /// Replaces every mutable field with the draft's values
    ///
    /// The identifier, `added_by`, and `created_at` are preserved.
    pub fn apply(&mut self, draft: MovieDraft) {
        self.title = draft.title;
        self.genre = draft.genre;
        self.release_year = draft.release_year;
        self.rating = draft.rating;
        self.duration = draft.duration;
        self.director = draft.director;
        self.cast = draft.cast;
        self.plot_summary = draft.plot_summary;
        self.poster_url = draft.poster_url;
        self.language = draft.language;
        self.country = draft.country;
    }
}

/// Client-supplied movie fields for create and update requests
///
/// Deliberately has no `addedBy` field: any such value in a request body is
/// ignored during deserialization, so ownership can only come from the
/// verified caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: f64,
    pub duration: u32,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub plot_summary: String,
    pub poster_url: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
}

impl MovieDraft {
    /// Checks the draft against the catalog's field constraints
    ///
    /// Runs before any storage access; a draft that fails here never
    /// reaches the store.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
        if self.genre.trim().is_empty() {
            return Err(AppError::Validation("genre must not be empty".to_string()));
        }
        if !(RATING_FLOOR..=RATING_CEILING).contains(&self.rating) {
            return Err(AppError::Validation(format!(
                "rating must be between {} and {}",
                RATING_FLOOR, RATING_CEILING
            )));
        }
        if self.duration == 0 {
            return Err(AppError::Validation(
                "duration must be a positive number of minutes".to_string(),
            ));
        }
        if self.poster_url.trim().is_empty() {
            return Err(AppError::Validation(
                "posterUrl must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
