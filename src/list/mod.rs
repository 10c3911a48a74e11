//! Generic list engine: filter, sort and group a collection of records, and
//! track the filter drawer's draft and applied criteria.

pub mod compare;
pub mod filter;
pub mod group;
pub mod memo;
pub mod sort;
pub mod state;
pub mod view;

mod macros;

pub use compare::{compare_numbers, compare_strings, fold};
pub use filter::{
    all_of_filter, apply_filters, choice_filter, range_filter, text_filter, Filters, Predicate, ALL,
};
pub use group::{group_by, group_letter, Groups};
pub use memo::{Memo, Versioned};
pub use sort::{descending, Sorter};
pub use state::{
    parse_sort_key, reducer, FilterKey, FilterValue, FilterValues, ListAction, ListState, SortKey,
    SHOW_COUNT_DEFAULT,
};
pub use view::{ListKind, ListView};
