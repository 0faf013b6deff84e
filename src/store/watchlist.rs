use std::collections::HashMap;

use uuid::Uuid;

/// Result of a conditional watchlist insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    AlreadyExists,
}

/// Per-user watchlist membership
///
/// Maps each user identity to the ordered list of movie ids they saved.
/// Membership is a fact about the (user, movie) pair; at most one entry
/// exists per pair. Callers serialize access through the catalog's write
/// lock, which makes the check-then-insert in [`add`](Self::add) atomic.
#[derive(Debug, Default)]
pub struct WatchlistLedger {
    entries: HashMap<String, Vec<Uuid>>,
}

impl WatchlistLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the pair unless it already exists
    pub fn add(&mut self, user: &str, movie_id: Uuid) -> AddOutcome {
        let list = self.entries.entry(user.to_string()).or_default();
        if list.contains(&movie_id) {
            return AddOutcome::AlreadyExists;
        }
        list.push(movie_id);
        AddOutcome::Created
    }

    /// Removes the pair, returning how many entries were removed (0 or 1)
    pub fn remove(&mut self, user: &str, movie_id: &Uuid) -> usize {
        match self.entries.get_mut(user) {
            Some(list) => {
                let before = list.len();
                list.retain(|existing| existing != movie_id);
                before - list.len()
            }
            None => 0,
        }
    }

    /// Movie ids saved by this user, oldest first
    pub fn list_for(&self, user: &str) -> Vec<Uuid> {
        self.entries.get(user).cloned().unwrap_or_default()
    }

    pub fn is_member(&self, user: &str, movie_id: &Uuid) -> bool {
        self.entries
            .get(user)
            .map(|list| list.contains(movie_id))
            .unwrap_or(false)
    }

    /// Drops every user's entry for a deleted movie, returning the count
    pub fn purge_movie(&mut self, movie_id: &Uuid) -> usize {
        let mut purged = 0;
        for list in self.entries.values_mut() {
            let before = list.len();
            list.retain(|existing| existing != movie_id);
            purged += before - list.len();
        }
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_conditional() {
        let mut ledger = WatchlistLedger::new();
        let movie = Uuid::new_v4();

        assert_eq!(ledger.add("a@x.com", movie), AddOutcome::Created);
        assert_eq!(ledger.add("a@x.com", movie), AddOutcome::AlreadyExists);
        assert!(ledger.is_member("a@x.com", &movie));
        assert_eq!(ledger.list_for("a@x.com").len(), 1);
    }

    #[test]
    fn test_membership_is_scoped_per_user() {
        let mut ledger = WatchlistLedger::new();
        let movie = Uuid::new_v4();

        ledger.add("a@x.com", movie);

        assert!(!ledger.is_member("b@x.com", &movie));
        assert_eq!(ledger.add("b@x.com", movie), AddOutcome::Created);
    }

    #[test]
    fn test_remove_absent_pair_is_harmless() {
        let mut ledger = WatchlistLedger::new();
        let movie = Uuid::new_v4();

        assert_eq!(ledger.remove("a@x.com", &movie), 0);

        ledger.add("a@x.com", movie);
        assert_eq!(ledger.remove("a@x.com", &movie), 1);
        assert_eq!(ledger.remove("a@x.com", &movie), 0);
        assert!(!ledger.is_member("a@x.com", &movie));
    }

    #[test]
    fn test_list_for_keeps_save_order() {
        let mut ledger = WatchlistLedger::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        ledger.add("a@x.com", first);
        ledger.add("a@x.com", second);

        assert_eq!(ledger.list_for("a@x.com"), vec![first, second]);
    }

    #[test]
    fn test_purge_movie_clears_every_user() {
        let mut ledger = WatchlistLedger::new();
        let shared = Uuid::new_v4();
        let other = Uuid::new_v4();

        ledger.add("a@x.com", shared);
        ledger.add("a@x.com", other);
        ledger.add("b@x.com", shared);

        assert_eq!(ledger.purge_movie(&shared), 2);
        assert!(!ledger.is_member("a@x.com", &shared));
        assert!(!ledger.is_member("b@x.com", &shared));
        assert!(ledger.is_member("a@x.com", &other));
    }
}
