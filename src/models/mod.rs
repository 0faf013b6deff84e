pub mod movie;
pub mod watchlist;

pub use movie::{Movie, MovieDraft};
pub use watchlist::{AddWatchlistRequest, WatchlistMovie};
