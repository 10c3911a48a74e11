//! The collections list.

use std::cmp::Ordering;

use crate::list::{
    self, compare_numbers, compare_strings, descending, group_letter, text_filter, FilterKey,
    FilterValue, FilterValues, Filters, ListAction, ListKind, ListState, Sorter,
};
use crate::models::Collection;
use crate::{filter_keys, sort_keys};

sort_keys! {
    pub enum CollectionSort {
        NameAsc => "name-asc",
        NameDesc => "name-desc",
        ReviewCountDesc => "review-count-desc",
        ReviewCountAsc => "review-count-asc",
    }
}

filter_keys! {
    pub enum CollectionFilter {
        Name => "name" as Text,
    }
}

pub type CollectionsState = ListState<CollectionFilter, CollectionSort>;
pub type CollectionsAction = ListAction<CollectionFilter, CollectionSort>;

pub struct Collections;

fn by_name(a: &Collection, b: &Collection) -> Ordering {
    compare_strings(&a.name, &b.name)
}

fn by_review_count(a: &Collection, b: &Collection) -> Ordering {
    compare_numbers(a.review_count, b.review_count)
}

impl ListKind for Collections {
    type Record = Collection;
    type Filter = CollectionFilter;
    type Sort = CollectionSort;

    const DEFAULT_SORT: CollectionSort = CollectionSort::NameAsc;

    fn sorter() -> Sorter<Collection, CollectionSort> {
        Sorter::new()
            .with(CollectionSort::NameAsc, by_name)
            .with(CollectionSort::NameDesc, descending(by_name))
            .with(CollectionSort::ReviewCountAsc, by_review_count)
            .with(CollectionSort::ReviewCountDesc, descending(by_review_count))
            .with_fallback(by_name)
    }

    fn build_filters(values: &FilterValues<CollectionFilter>) -> Filters<Collection> {
        Filters::new().with(
            CollectionFilter::Name.name(),
            text_filter(
                values
                    .get(&CollectionFilter::Name)
                    .and_then(FilterValue::as_text),
                |collection: &Collection| collection.name.as_str(),
            ),
        )
    }

    fn group_for_sort(collection: &Collection, sort: &CollectionSort) -> String {
        match sort {
            CollectionSort::NameAsc | CollectionSort::NameDesc => {
                group_letter(&collection.name).to_string()
            }
            CollectionSort::ReviewCountAsc | CollectionSort::ReviewCountDesc => String::new(),
        }
    }
}

pub fn initial_state() -> CollectionsState {
    Collections::initial_state()
}

pub fn reducer(state: CollectionsState, action: CollectionsAction) -> CollectionsState {
    list::reducer(state, action)
}
