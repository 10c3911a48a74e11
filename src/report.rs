use std::io::Write;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::list::{
    parse_sort_key, reducer, FilterValue, ListAction, ListKind, ListState, ListView, SortKey,
    Versioned,
};
use crate::lists::{
    CastAndCrew, CastAndCrewFilter, CollectionFilter, Collections, TitleFilter, Titles,
    Watchlist, WatchlistFilter,
};

/// Which list to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListName {
    Titles,
    Collections,
    CastAndCrew,
    Watchlist,
}

impl FromStr for ListName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "titles" | "reviews" => Ok(ListName::Titles),
            "collections" => Ok(ListName::Collections),
            "cast-and-crew" => Ok(ListName::CastAndCrew),
            "watchlist" => Ok(ListName::Watchlist),
            other => Err(AppError::UnknownList(other.to_string())),
        }
    }
}

/// Options shared by every list rendering
struct RenderOptions<'a> {
    sort: Option<&'a str>,
    query: Option<&'a str>,
    show_count_increment: usize,
}

/// Writes the configured list as plain text, one section per group.
pub fn render(config: &Config, catalog: &dyn Catalog, out: &mut dyn Write) -> AppResult<()> {
    let options = RenderOptions {
        sort: config.sort.as_deref(),
        query: config.query.as_deref(),
        show_count_increment: config.show_count_increment,
    };

    match config.list.parse::<ListName>()? {
        ListName::Titles => render_list::<Titles>(
            catalog.titles()?,
            TitleFilter::Title,
            &options,
            |title| format!("{} ({}) {}", title.title, title.release_year, title.grade),
            out,
        ),
        ListName::Collections => render_list::<Collections>(
            catalog.collections()?,
            CollectionFilter::Name,
            &options,
            |collection| format!("{} ({} reviews)", collection.name, collection.review_count),
            out,
        ),
        ListName::CastAndCrew => render_list::<CastAndCrew>(
            catalog.cast_and_crew()?,
            CastAndCrewFilter::Name,
            &options,
            |member| format!("{} ({} reviews)", member.name, member.review_count),
            out,
        ),
        ListName::Watchlist => render_list::<Watchlist>(
            catalog.watchlist()?,
            WatchlistFilter::Title,
            &options,
            |title| format!("{} ({})", title.title, title.release_year),
            out,
        ),
    }
}

fn initial_sort<L: ListKind>(requested: Option<&str>) -> L::Sort {
    let Some(requested) = requested else {
        return L::DEFAULT_SORT;
    };
    match parse_sort_key::<L::Sort>(requested) {
        Ok(sort) => sort,
        Err(e) => {
            tracing::warn!(
                error = %e,
                default = L::DEFAULT_SORT.as_str(),
                "Falling back to default sort"
            );
            L::DEFAULT_SORT
        }
    }
}

fn render_list<L: ListKind>(
    records: Vec<L::Record>,
    search: L::Filter,
    options: &RenderOptions<'_>,
    label: impl Fn(&L::Record) -> String,
    out: &mut dyn Write,
) -> AppResult<()> {
    let mut state = ListState::with_increment(
        initial_sort::<L>(options.sort),
        options.show_count_increment,
    );
    if let Some(query) = options.query {
        state = reducer(
            state,
            ListAction::SetPendingFilter {
                name: search,
                value: Some(FilterValue::Text(query.to_string())),
            },
        );
        state = reducer(state, ListAction::CommitFilters);
    }

    let records = Versioned::new(records);
    let mut view = ListView::<L>::new();
    let groups = view.visible_groups(&records, &state);
    let total = view.filtered(&records, &state).len();

    for (heading, members) in groups.iter() {
        if !heading.is_empty() {
            writeln!(out, "{}", heading)?;
        }
        for member in members {
            writeln!(out, "  {}", label(member))?;
        }
    }
    writeln!(out, "Showing {} of {}", groups.total_len(), total)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;
    use crate::models::{Collection, WatchlistTitle};
    use std::path::PathBuf;

    fn config(list: &str, sort: Option<&str>, query: Option<&str>, increment: usize) -> Config {
        Config {
            catalog_dir: PathBuf::from("unused"),
            list: list.to_string(),
            sort: sort.map(str::to_string),
            query: query.map(str::to_string),
            show_count_increment: increment,
        }
    }

    fn collections() -> Vec<Collection> {
        vec![
            Collection::new("Banana", 3),
            Collection::new("apple", 10),
            Collection::new("Cherry", 3),
            Collection::new("123", 1),
        ]
    }

    fn render_to_string(config: &Config, catalog: &MockCatalog) -> String {
        let mut out = Vec::new();
        render(config, catalog, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_renders_grouped_collections() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_collections()
            .times(1)
            .returning(|| Ok(collections()));

        let output = render_to_string(&config("collections", None, None, 100), &catalog);
        assert_eq!(
            output,
            "A\n  apple (10 reviews)\nB\n  Banana (3 reviews)\nC\n  Cherry (3 reviews)\n#\n  123 (1 reviews)\nShowing 4 of 4\n"
        );
    }

    #[test]
    fn test_query_and_page_size() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_collections()
            .returning(|| Ok(collections()));

        let output = render_to_string(
            &config("collections", Some("review-count-desc"), Some("an"), 1),
            &catalog,
        );
        assert_eq!(output, "  Banana (3 reviews)\nShowing 1 of 1\n");

        let output = render_to_string(
            &config("collections", Some("review-count-desc"), None, 2),
            &catalog,
        );
        assert_eq!(
            output,
            "  apple (10 reviews)\n  Banana (3 reviews)\nShowing 2 of 4\n"
        );
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let mut catalog = MockCatalog::new();
        catalog.expect_watchlist().returning(|| {
            Ok(vec![
                WatchlistTitle {
                    imdb_id: "tt0050766".to_string(),
                    title: "Night of the Demon".to_string(),
                    sort_title: "Night of the Demon".to_string(),
                    release_year: "1957".to_string(),
                    director_names: Vec::new(),
                    performer_names: Vec::new(),
                    writer_names: Vec::new(),
                    collection_names: Vec::new(),
                },
            ])
        });

        let output = render_to_string(&config("watchlist", Some("sideways"), None, 100), &catalog);
        assert_eq!(output, "1957\n  Night of the Demon (1957)\nShowing 1 of 1\n");
    }

    #[test]
    fn test_unknown_list() {
        let catalog = MockCatalog::new();
        let mut out = Vec::new();
        let result = render(&config("directors", None, None, 100), &catalog, &mut out);
        assert!(matches!(result, Err(AppError::UnknownList(_))));
    }

    #[test]
    fn test_catalog_error_propagates() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_titles()
            .returning(|| Err(AppError::NotFound("titles.json".to_string())));
        let mut out = Vec::new();
        let result = render(&config("titles", None, None, 100), &catalog, &mut out);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
