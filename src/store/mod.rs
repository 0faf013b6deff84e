pub mod movies;
pub mod watchlist;

pub use movies::MovieStore;
pub use watchlist::{AddOutcome, WatchlistLedger};
