use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Grade;

/// A reviewed movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    /// IMDb identifier (e.g. "tt0088846")
    pub imdb_id: String,
    /// Display title, including year disambiguation when needed
    pub title: String,
    /// Title used for ordering, with leading articles moved or dropped
    pub sort_title: String,
    /// Four-digit release year as exported by the catalog
    pub release_year: String,
    pub grade: Grade,
    pub review_date: NaiveDate,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Title {
    pub fn release_year_number(&self) -> Option<i32> {
        self.release_year.parse().ok()
    }

    pub fn review_year(&self) -> i32 {
        self.review_date.year()
    }
}

/// A movie the log intends to watch and review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistTitle {
    pub imdb_id: String,
    pub title: String,
    pub sort_title: String,
    pub release_year: String,
    #[serde(default)]
    pub director_names: Vec<String>,
    #[serde(default)]
    pub performer_names: Vec<String>,
    #[serde(default)]
    pub writer_names: Vec<String>,
    #[serde(default)]
    pub collection_names: Vec<String>,
}

impl WatchlistTitle {
    pub fn release_year_number(&self) -> Option<i32> {
        self.release_year.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_title() {
        let json = r#"{
            "imdbId": "tt0088846",
            "title": "Brazil",
            "sortTitle": "Brazil",
            "releaseYear": "1985",
            "grade": "A+",
            "reviewDate": "2021-03-14",
            "genres": ["Comedy", "Sci-Fi"]
        }"#;

        let title: Title = serde_json::from_str(json).unwrap();
        assert_eq!(title.imdb_id, "tt0088846");
        assert_eq!(title.grade, Grade::APlus);
        assert_eq!(title.release_year_number(), Some(1985));
        assert_eq!(title.review_year(), 2021);
        assert_eq!(title.genres.len(), 2);
    }

    #[test]
    fn test_unparseable_release_year() {
        let json = r#"{
            "imdbId": "tt9999999",
            "title": "Untitled Project",
            "sortTitle": "Untitled Project",
            "releaseYear": "TBA"
        }"#;

        let title: WatchlistTitle = serde_json::from_str(json).unwrap();
        assert_eq!(title.release_year_number(), None);
        assert!(title.director_names.is_empty());
    }
}
