//! The cast & crew list.

use std::cmp::Ordering;

use crate::list::{
    self, choice_filter, compare_numbers, compare_strings, descending, group_letter, text_filter,
    FilterKey, FilterValue, FilterValues, Filters, ListAction, ListKind, ListState, Sorter,
};
use crate::models::CastMember;
use crate::{filter_keys, sort_keys};

sort_keys! {
    pub enum CastAndCrewSort {
        NameAsc => "name-asc",
        NameDesc => "name-desc",
        ReviewCountDesc => "review-count-desc",
        ReviewCountAsc => "review-count-asc",
    }
}

filter_keys! {
    pub enum CastAndCrewFilter {
        Name => "name" as Text,
        /// "director", "performer", "writer" or "All"
        Credit => "credit" as Choice,
    }
}

pub type CastAndCrewState = ListState<CastAndCrewFilter, CastAndCrewSort>;
pub type CastAndCrewAction = ListAction<CastAndCrewFilter, CastAndCrewSort>;

pub struct CastAndCrew;

fn by_name(a: &CastMember, b: &CastMember) -> Ordering {
    compare_strings(&a.name, &b.name)
}

fn by_review_count(a: &CastMember, b: &CastMember) -> Ordering {
    compare_numbers(a.review_count, b.review_count)
}

impl ListKind for CastAndCrew {
    type Record = CastMember;
    type Filter = CastAndCrewFilter;
    type Sort = CastAndCrewSort;

    const DEFAULT_SORT: CastAndCrewSort = CastAndCrewSort::NameAsc;

    fn sorter() -> Sorter<CastMember, CastAndCrewSort> {
        Sorter::new()
            .with(CastAndCrewSort::NameAsc, by_name)
            .with(CastAndCrewSort::NameDesc, descending(by_name))
            .with(CastAndCrewSort::ReviewCountAsc, by_review_count)
            .with(CastAndCrewSort::ReviewCountDesc, descending(by_review_count))
            .with_fallback(by_name)
    }

    fn build_filters(values: &FilterValues<CastAndCrewFilter>) -> Filters<CastMember> {
        Filters::new()
            .with(
                CastAndCrewFilter::Name.name(),
                text_filter(
                    values
                        .get(&CastAndCrewFilter::Name)
                        .and_then(FilterValue::as_text),
                    |member: &CastMember| member.name.as_str(),
                ),
            )
            .with(
                CastAndCrewFilter::Credit.name(),
                choice_filter(
                    values
                        .get(&CastAndCrewFilter::Credit)
                        .and_then(FilterValue::as_choice),
                    CastMember::is_credited_as,
                ),
            )
    }

    fn group_for_sort(member: &CastMember, sort: &CastAndCrewSort) -> String {
        match sort {
            CastAndCrewSort::NameAsc | CastAndCrewSort::NameDesc => {
                group_letter(&member.name).to_string()
            }
            CastAndCrewSort::ReviewCountAsc | CastAndCrewSort::ReviewCountDesc => String::new(),
        }
    }
}

pub fn initial_state() -> CastAndCrewState {
    CastAndCrew::initial_state()
}

pub fn reducer(state: CastAndCrewState, action: CastAndCrewAction) -> CastAndCrewState {
    list::reducer(state, action)
}
