//! The watchlist.

use std::cmp::Ordering;

use crate::list::{
    self, choice_filter, compare_strings, descending, group_letter, range_filter, text_filter,
    FilterKey, FilterValue, FilterValues, Filters, ListAction, ListKind, ListState, Sorter,
};
use crate::models::WatchlistTitle;
use crate::{filter_keys, sort_keys};

sort_keys! {
    pub enum WatchlistSort {
        TitleAsc => "title-asc",
        TitleDesc => "title-desc",
        ReleaseDateDesc => "release-date-desc",
        ReleaseDateAsc => "release-date-asc",
    }
}

filter_keys! {
    pub enum WatchlistFilter {
        Title => "title" as Text,
        Director => "director" as Choice,
        Performer => "performer" as Choice,
        Writer => "writer" as Choice,
        Collection => "collection" as Choice,
        ReleaseYear => "release-year" as Range,
    }
}

pub type WatchlistState = ListState<WatchlistFilter, WatchlistSort>;
pub type WatchlistAction = ListAction<WatchlistFilter, WatchlistSort>;

pub struct Watchlist;

fn by_title(a: &WatchlistTitle, b: &WatchlistTitle) -> Ordering {
    compare_strings(&a.sort_title, &b.sort_title)
}

fn by_release_date(a: &WatchlistTitle, b: &WatchlistTitle) -> Ordering {
    compare_strings(&a.release_year, &b.release_year)
}

fn credited(names: &[String], name: &str) -> bool {
    names.iter().any(|credited| credited == name)
}

impl ListKind for Watchlist {
    type Record = WatchlistTitle;
    type Filter = WatchlistFilter;
    type Sort = WatchlistSort;

    const DEFAULT_SORT: WatchlistSort = WatchlistSort::ReleaseDateDesc;

    fn sorter() -> Sorter<WatchlistTitle, WatchlistSort> {
        Sorter::new()
            .with(WatchlistSort::TitleAsc, by_title)
            .with(WatchlistSort::TitleDesc, descending(by_title))
            .with(WatchlistSort::ReleaseDateAsc, by_release_date)
            .with(WatchlistSort::ReleaseDateDesc, descending(by_release_date))
            .with_fallback(by_title)
    }

    fn build_filters(values: &FilterValues<WatchlistFilter>) -> Filters<WatchlistTitle> {
        let choice = |key: WatchlistFilter| values.get(&key).and_then(FilterValue::as_choice);

        Filters::new()
            .with(
                WatchlistFilter::Title.name(),
                text_filter(
                    values
                        .get(&WatchlistFilter::Title)
                        .and_then(FilterValue::as_text),
                    |title: &WatchlistTitle| title.title.as_str(),
                ),
            )
            .with(
                WatchlistFilter::Director.name(),
                choice_filter(
                    choice(WatchlistFilter::Director),
                    |title: &WatchlistTitle, name: &str| credited(&title.director_names, name),
                ),
            )
            .with(
                WatchlistFilter::Performer.name(),
                choice_filter(
                    choice(WatchlistFilter::Performer),
                    |title: &WatchlistTitle, name: &str| credited(&title.performer_names, name),
                ),
            )
            .with(
                WatchlistFilter::Writer.name(),
                choice_filter(
                    choice(WatchlistFilter::Writer),
                    |title: &WatchlistTitle, name: &str| credited(&title.writer_names, name),
                ),
            )
            .with(
                WatchlistFilter::Collection.name(),
                choice_filter(
                    choice(WatchlistFilter::Collection),
                    |title: &WatchlistTitle, name: &str| credited(&title.collection_names, name),
                ),
            )
            .with(
                WatchlistFilter::ReleaseYear.name(),
                range_filter(
                    values
                        .get(&WatchlistFilter::ReleaseYear)
                        .and_then(FilterValue::as_range),
                    WatchlistTitle::release_year_number,
                ),
            )
    }

    fn group_for_sort(title: &WatchlistTitle, sort: &WatchlistSort) -> String {
        match sort {
            WatchlistSort::TitleAsc | WatchlistSort::TitleDesc => {
                group_letter(&title.sort_title).to_string()
            }
            WatchlistSort::ReleaseDateAsc | WatchlistSort::ReleaseDateDesc => {
                title.release_year.clone()
            }
        }
    }
}

pub fn initial_state() -> WatchlistState {
    Watchlist::initial_state()
}

pub fn reducer(state: WatchlistState, action: WatchlistAction) -> WatchlistState {
    list::reducer(state, action)
}
