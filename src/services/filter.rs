use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::movie::{Movie, RATING_CEILING, RATING_FLOOR};

/// How many movies the top-rated view returns by default
pub const TOP_RATED_LIMIT: usize = 5;
/// How many movies the recently-added view returns by default
pub const RECENTLY_ADDED_LIMIT: usize = 6;

/// Caller-supplied predicate narrowing the listed movie set
///
/// All fields are optional and combined with logical AND; an absent field
/// never excludes a record.
#[derive(Debug, Clone, Default)]
pub struct MovieQuery {
    /// Case-insensitive substring match against the title
    pub title_contains: Option<String>,
    /// Acceptable genre values; empty means every genre matches
    pub genres: HashSet<String>,
    /// Inclusive lower rating bound, defaulting to the domain floor
    pub rating_min: Option<f64>,
    /// Inclusive upper rating bound, defaulting to the domain ceiling
    pub rating_max: Option<f64>,
}

/// Evaluates a query against a snapshot of the store
///
/// Pure function of its inputs; the result keeps the store's insertion
/// order.
pub fn filter(records: &[Movie], query: &MovieQuery) -> Vec<Movie> {
    let needle = query.title_contains.as_deref().map(str::to_lowercase);
    let min = query.rating_min.unwrap_or(RATING_FLOOR);
    let max = query.rating_max.unwrap_or(RATING_CEILING);

    records
        .iter()
        .filter(|movie| {
            needle
                .as_ref()
                .map_or(true, |n| movie.title.to_lowercase().contains(n.as_str()))
                && (query.genres.is_empty() || query.genres.contains(&movie.genre))
                && movie.rating >= min
                && movie.rating <= max
        })
        .cloned()
        .collect()
}

/// Highest-rated movies, ties kept in original order, truncated to `limit`
pub fn top_rated(records: &[Movie], limit: usize) -> Vec<Movie> {
    let mut ranked = records.to_vec();
    // Stable sort, so equally rated movies keep their catalog order
    ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

/// Most recently released movies, truncated to `limit`
///
/// Ordered by release year, as the original catalog did; true catalog
/// recency lives in each record's `created_at`.
pub fn recently_added(records: &[Movie], limit: usize) -> Vec<Movie> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.release_year.cmp(&a.release_year));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieDraft;

    fn movie(title: &str, genre: &str, year: i32, rating: f64) -> Movie {
        Movie::new(
            MovieDraft {
                title: title.to_string(),
                genre: genre.to_string(),
                release_year: year,
                rating,
                duration: 120,
                director: String::new(),
                cast: String::new(),
                plot_summary: String::new(),
                poster_url: "https://example.com/p.jpg".to_string(),
                language: String::new(),
                country: String::new(),
            },
            "a@x.com",
        )
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie("Inception", "Sci-Fi", 2010, 8.8),
            movie("The Godfather", "Crime", 1972, 9.2),
            movie("Interstellar", "Sci-Fi", 2014, 8.6),
            movie("Amelie", "Romance", 2001, 8.3),
        ]
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let records = sample();
        let result = filter(&records, &MovieQuery::default());
        assert_eq!(
            titles(&result),
            ["Inception", "The Godfather", "Interstellar", "Amelie"]
        );
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let records = sample();
        let query = MovieQuery {
            title_contains: Some("inter".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&records, &query)), ["Interstellar"]);
    }

    #[test]
    fn test_genre_set_membership() {
        let records = sample();
        let query = MovieQuery {
            genres: ["Sci-Fi".to_string(), "Crime".to_string()].into(),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter(&records, &query)),
            ["Inception", "The Godfather", "Interstellar"]
        );
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        let records = sample();
        let query = MovieQuery {
            rating_min: Some(8.6),
            rating_max: Some(8.8),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter(&records, &query)),
            ["Inception", "Interstellar"]
        );
    }

    #[test]
    fn test_absent_bound_never_excludes() {
        let records = sample();
        let query = MovieQuery {
            rating_min: Some(0.0),
            ..Default::default()
        };
        assert_eq!(filter(&records, &query).len(), records.len());
    }

    #[test]
    fn test_conditions_combine_with_and() {
        let records = sample();
        let query = MovieQuery {
            title_contains: Some("in".to_string()),
            genres: ["Sci-Fi".to_string()].into(),
            rating_min: Some(8.7),
            rating_max: None,
        };
        assert_eq!(titles(&filter(&records, &query)), ["Inception"]);
    }

    #[test]
    fn test_top_rated_orders_and_truncates() {
        let records = sample();
        let result = top_rated(&records, 2);
        assert_eq!(titles(&result), ["The Godfather", "Inception"]);
    }

    #[test]
    fn test_top_rated_ties_keep_catalog_order() {
        let records = vec![
            movie("First", "Drama", 2000, 8.0),
            movie("Second", "Drama", 2001, 8.0),
            movie("Third", "Drama", 2002, 9.0),
        ];
        let result = top_rated(&records, 3);
        assert_eq!(titles(&result), ["Third", "First", "Second"]);
    }

    #[test]
    fn test_recently_added_orders_by_release_year() {
        let records = sample();
        let result = recently_added(&records, 3);
        assert_eq!(
            titles(&result),
            ["Interstellar", "Inception", "Amelie"]
        );
    }
}
