use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::models::{CastMember, Collection, Title, WatchlistTitle};

/// Source of the records behind each list
///
/// The list engine only ever sees plain vectors; where they come from is up
/// to the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait Catalog {
    fn titles(&self) -> AppResult<Vec<Title>>;

    fn collections(&self) -> AppResult<Vec<Collection>>;

    fn cast_and_crew(&self) -> AppResult<Vec<CastMember>>;

    fn watchlist(&self) -> AppResult<Vec<WatchlistTitle>>;
}

/// Catalog exported as one JSON array per list in a directory
pub struct JsonCatalog {
    dir: PathBuf,
}

impl JsonCatalog {
    pub const TITLES_FILE: &'static str = "titles.json";
    pub const COLLECTIONS_FILE: &'static str = "collections.json";
    pub const CAST_AND_CREW_FILE: &'static str = "cast-and-crew.json";
    pub const WATCHLIST_FILE: &'static str = "watchlist.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> AppResult<Vec<T>> {
        let path = self.dir.join(file);
        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
            _ => AppError::Io(e),
        })?;

        let records: Vec<T> = serde_json::from_str(&json).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to parse catalog file");
            e
        })?;

        tracing::info!(path = %path.display(), count = records.len(), "Loaded catalog file");
        Ok(records)
    }
}

impl Catalog for JsonCatalog {
    fn titles(&self) -> AppResult<Vec<Title>> {
        self.read(Self::TITLES_FILE)
    }

    fn collections(&self) -> AppResult<Vec<Collection>> {
        self.read(Self::COLLECTIONS_FILE)
    }

    fn cast_and_crew(&self) -> AppResult<Vec<CastMember>> {
        self.read(Self::CAST_AND_CREW_FILE)
    }

    fn watchlist(&self) -> AppResult<Vec<WatchlistTitle>> {
        self.read(Self::WATCHLIST_FILE)
    }
}
