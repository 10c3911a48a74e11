//! The four browsable lists of the log.

pub mod cast_and_crew;
pub mod collections;
pub mod titles;
pub mod watchlist;

pub use cast_and_crew::{CastAndCrew, CastAndCrewFilter, CastAndCrewSort};
pub use collections::{CollectionFilter, CollectionSort, Collections};
pub use titles::{TitleFilter, TitleSort, Titles};
pub use watchlist::{Watchlist, WatchlistFilter, WatchlistSort};
