use std::path::PathBuf;

use serde::Deserialize;

use crate::list::SHOW_COUNT_DEFAULT;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the exported catalog JSON files
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,

    /// Which list to render (titles, collections, cast-and-crew, watchlist)
    #[serde(default = "default_list")]
    pub list: String,

    /// Sort key string (e.g. "release-date-desc"); the list default when unset
    #[serde(default)]
    pub sort: Option<String>,

    /// Name/title text filter applied before rendering
    #[serde(default)]
    pub query: Option<String>,

    /// Number of records revealed per "show more"
    #[serde(default = "default_show_count_increment")]
    pub show_count_increment: usize,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("content/data")
}

fn default_list() -> String {
    "titles".to_string()
}

fn default_show_count_increment() -> usize {
    SHOW_COUNT_DEFAULT
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        if config.show_count_increment == 0 {
            anyhow::bail!("Failed to load config: show_count_increment must be positive");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.catalog_dir, PathBuf::from("content/data"));
        assert_eq!(config.list, "titles");
        assert_eq!(config.sort, None);
        assert_eq!(config.query, None);
        assert_eq!(config.show_count_increment, 100);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("CATALOG_DIR", "/tmp/catalog"),
            ("LIST", "watchlist"),
            ("SORT", "title-desc"),
            ("QUERY", "alien"),
            ("SHOW_COUNT_INCREMENT", "25"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_dir, PathBuf::from("/tmp/catalog"));
        assert_eq!(config.list, "watchlist");
        assert_eq!(config.sort.as_deref(), Some("title-desc"));
        assert_eq!(config.query.as_deref(), Some("alien"));
        assert_eq!(config.show_count_increment, 25);
    }

    #[test]
    fn test_zero_increment_rejected() {
        let result = Config::from_vars(vars(&[("SHOW_COUNT_INCREMENT", "0")]));
        assert!(result.is_err());
    }
}
