use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Movie, MovieDraft};

/// In-memory store holding the canonical movie collection
///
/// Records are keyed by their UUID and listed in insertion order. Because
/// identifiers are random UUIDs assigned at construction, a deleted movie's
/// id can never resolve to an unrelated later record.
#[derive(Debug, Default)]
pub struct MovieStore {
    records: HashMap<Uuid, Movie>,
    /// Insertion order of live records
    order: Vec<Uuid>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record and returns its identifier
    pub fn insert(&mut self, movie: Movie) -> Uuid {
        let id = movie.id;
        self.order.push(id);
        self.records.insert(id, movie);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&Movie> {
        self.records.get(id)
    }

    /// Replaces the mutable fields of an existing record
    ///
    /// Returns `false` when no record has this id; never creates one.
    pub fn replace(&mut self, id: &Uuid, draft: MovieDraft) -> bool {
        match self.records.get_mut(id) {
            Some(movie) => {
                movie.apply(draft);
                true
            }
            None => false,
        }
    }

    /// Removes a record, returning how many were removed (0 or 1)
    pub fn remove(&mut self, id: &Uuid) -> usize {
        match self.records.remove(id) {
            Some(_) => {
                self.order.retain(|existing| existing != id);
                1
            }
            None => 0,
        }
    }

    /// All live records in insertion order
    pub fn list_all(&self) -> Vec<Movie> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_string(),
            genre: "Drama".to_string(),
            release_year: 2000,
            rating: 7.0,
            duration: 120,
            director: String::new(),
            cast: String::new(),
            plot_summary: String::new(),
            poster_url: "https://example.com/p.jpg".to_string(),
            language: String::new(),
            country: String::new(),
        }
    }

    fn movie(title: &str) -> Movie {
        Movie::new(draft(title), "a@x.com")
    }

    #[test]
    fn test_insert_then_get() {
        let mut store = MovieStore::new();
        let id = store.insert(movie("First"));

        let found = store.get(&id).unwrap();
        assert_eq!(found.title, "First");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let mut store = MovieStore::new();
        store.insert(movie("First"));
        let second = store.insert(movie("Second"));
        store.insert(movie("Third"));

        store.remove(&second);
        store.insert(movie("Fourth"));

        let titles: Vec<_> = store.list_all().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["First", "Third", "Fourth"]);
    }

    #[test]
    fn test_replace_missing_record_fails() {
        let mut store = MovieStore::new();
        let absent = Uuid::new_v4();

        assert!(!store.replace(&absent, draft("Ghost")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_keeps_id_and_owner() {
        let mut store = MovieStore::new();
        let id = store.insert(movie("Original"));

        assert!(store.replace(&id, draft("Updated")));

        let found = store.get(&id).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.title, "Updated");
        assert_eq!(found.added_by, "a@x.com");
    }

    #[test]
    fn test_remove_reports_count() {
        let mut store = MovieStore::new();
        let id = store.insert(movie("Doomed"));

        assert_eq!(store.remove(&id), 1);
        assert_eq!(store.remove(&id), 0);
        assert!(store.get(&id).is_none());
    }
}
