use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{AppError, AppResult};

use super::memo::Versioned;

/// Records revealed per "show more", and the initial page size.
pub const SHOW_COUNT_DEFAULT: usize = 100;

/// A single filter criterion as chosen in the filter drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Free text matched as a substring
    Text(String),
    /// One option out of a fixed set, or `"All"`
    Choice(String),
    /// Every selected option must be present
    AllOf(Vec<String>),
    /// Inclusive numeric bounds
    Range(i32, i32),
}

impl FilterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FilterValue::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn as_all_of(&self) -> Option<&[String]> {
        match self {
            FilterValue::AllOf(selected) => Some(selected),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<(i32, i32)> {
        match self {
            FilterValue::Range(from, to) => Some((*from, *to)),
            _ => None,
        }
    }
}

/// Filter criteria keyed by filter name. A missing key is unconstrained.
pub type FilterValues<F> = BTreeMap<F, FilterValue>;

/// Identifies one filter of a list.
pub trait FilterKey: Copy + Ord + Debug + 'static {
    fn name(self) -> &'static str;

    /// Whether `value` has the shape this filter expects.
    fn accepts(self, value: &FilterValue) -> bool;
}

/// Identifies one ordering of a list.
pub trait SortKey: Copy + Eq + Hash + Debug + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
}

pub fn parse_sort_key<S: SortKey>(s: &str) -> AppResult<S> {
    S::ALL
        .iter()
        .copied()
        .find(|key| key.as_str() == s)
        .ok_or_else(|| AppError::UnknownSortKey(s.to_string()))
}

/// State of one list view: the committed filters driving the results, the
/// draft being edited in the drawer, the ordering and the page size.
#[derive(Debug, Clone)]
pub struct ListState<F: FilterKey, S: SortKey> {
    pub applied_filter_values: Versioned<FilterValues<F>>,
    pub pending_filter_values: Versioned<FilterValues<F>>,
    pub sort: S,
    pub show_count: usize,
    pub show_count_increment: usize,
    pub is_filter_drawer_open: bool,
}

impl<F: FilterKey, S: SortKey> ListState<F, S> {
    pub fn new(sort: S) -> Self {
        Self::with_increment(sort, SHOW_COUNT_DEFAULT)
    }

    pub fn with_increment(sort: S, show_count_increment: usize) -> Self {
        debug_assert!(show_count_increment > 0, "show count increment must be positive");
        Self {
            applied_filter_values: Versioned::new(FilterValues::new()),
            pending_filter_values: Versioned::new(FilterValues::new()),
            sort,
            show_count: show_count_increment,
            show_count_increment,
            is_filter_drawer_open: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<F, S> {
    /// Edit the draft; `None` clears that filter
    SetPendingFilter {
        name: F,
        value: Option<FilterValue>,
    },
    /// Apply the draft and close the drawer
    CommitFilters,
    /// Drop every filter, draft and applied
    ClearFilters,
    /// Discard the draft and close the drawer
    CancelPendingFilters,
    SetSort(S),
    ShowMore,
    ToggleFilterDrawer,
}

/// Applies one action to a list state.
pub fn reducer<F: FilterKey, S: SortKey>(
    mut state: ListState<F, S>,
    action: ListAction<F, S>,
) -> ListState<F, S> {
    tracing::trace!(?action, "List action");

    match action {
        ListAction::SetPendingFilter { name, value } => {
            state.pending_filter_values.update(|pending| match value {
                Some(value) => {
                    debug_assert!(
                        name.accepts(&value),
                        "filter {} does not accept {:?}",
                        name.name(),
                        value
                    );
                    if let FilterValue::Range(from, to) = &value {
                        debug_assert!(from <= to, "filter {} has inverted range", name.name());
                    }
                    pending.insert(name, value);
                }
                None => {
                    pending.remove(&name);
                }
            });
        }
        ListAction::CommitFilters => {
            state
                .applied_filter_values
                .replace(state.pending_filter_values.value().clone());
            state.show_count = state.show_count_increment;
            state.is_filter_drawer_open = false;
        }
        ListAction::ClearFilters => {
            state.applied_filter_values.replace(FilterValues::new());
            state.pending_filter_values.replace(FilterValues::new());
            state.show_count = state.show_count_increment;
        }
        ListAction::CancelPendingFilters => {
            state
                .pending_filter_values
                .replace(state.applied_filter_values.value().clone());
            state.is_filter_drawer_open = false;
        }
        ListAction::SetSort(sort) => {
            state.sort = sort;
            state.show_count = state.show_count_increment;
        }
        ListAction::ShowMore => {
            state.show_count = state.show_count.saturating_add(state.show_count_increment);
        }
        ListAction::ToggleFilterDrawer => {
            if !state.is_filter_drawer_open {
                state
                    .pending_filter_values
                    .replace(state.applied_filter_values.value().clone());
            }
            state.is_filter_drawer_open = !state.is_filter_drawer_open;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::filter_keys! {
        enum Key {
            Name => "name" as Text,
            Year => "year" as Range,
        }
    }

    crate::sort_keys! {
        enum Order {
            NameAsc => "name-asc",
            NameDesc => "name-desc",
        }
    }

    type State = ListState<Key, Order>;
    type Action = ListAction<Key, Order>;

    fn set_name(text: &str) -> Action {
        ListAction::SetPendingFilter {
            name: Key::Name,
            value: Some(FilterValue::Text(text.to_string())),
        }
    }

    fn apply(state: State, actions: Vec<Action>) -> State {
        actions
            .into_iter()
            .fold(state, |state, action| reducer(state, action))
    }

    #[test]
    fn test_initial_state() {
        let state = State::new(Order::NameAsc);
        assert!(state.applied_filter_values.is_empty());
        assert!(state.pending_filter_values.is_empty());
        assert_eq!(state.sort, Order::NameAsc);
        assert_eq!(state.show_count, SHOW_COUNT_DEFAULT);
        assert!(!state.is_filter_drawer_open);
    }

    #[test]
    fn test_set_pending_leaves_applied_alone() {
        let state = State::new(Order::NameAsc);
        let applied_version = state.applied_filter_values.version();

        let state = reducer(state, set_name("alien"));
        assert!(state.applied_filter_values.is_empty());
        assert_eq!(state.applied_filter_values.version(), applied_version);
        assert_eq!(
            state.pending_filter_values.get(&Key::Name),
            Some(&FilterValue::Text("alien".to_string()))
        );
    }

    #[test]
    fn test_set_pending_none_removes() {
        let state = apply(
            State::new(Order::NameAsc),
            vec![
                set_name("alien"),
                ListAction::SetPendingFilter {
                    name: Key::Name,
                    value: None,
                },
            ],
        );
        assert!(state.pending_filter_values.is_empty());
    }

    #[test]
    fn test_commit_copies_pending() {
        let state = apply(
            State::new(Order::NameAsc),
            vec![
                ListAction::ToggleFilterDrawer,
                set_name("alien"),
                ListAction::ShowMore,
                ListAction::CommitFilters,
            ],
        );
        assert_eq!(
            state.applied_filter_values.value(),
            state.pending_filter_values.value()
        );
        assert_eq!(state.show_count, SHOW_COUNT_DEFAULT);
        assert!(!state.is_filter_drawer_open);

        // Later drafts do not leak into the applied copy.
        let state = reducer(state, set_name("aliens"));
        assert_eq!(
            state.applied_filter_values.get(&Key::Name),
            Some(&FilterValue::Text("alien".to_string()))
        );
    }

    #[test]
    fn test_clear_keeps_drawer_state() {
        let state = apply(
            State::new(Order::NameAsc),
            vec![
                set_name("alien"),
                ListAction::CommitFilters,
                ListAction::ToggleFilterDrawer,
                ListAction::ShowMore,
                ListAction::ClearFilters,
            ],
        );
        assert!(state.applied_filter_values.is_empty());
        assert!(state.pending_filter_values.is_empty());
        assert_eq!(state.show_count, SHOW_COUNT_DEFAULT);
        assert!(state.is_filter_drawer_open);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let state = apply(
            State::new(Order::NameAsc),
            vec![
                set_name("alien"),
                ListAction::CommitFilters,
                ListAction::ToggleFilterDrawer,
                set_name("heat"),
                ListAction::CancelPendingFilters,
            ],
        );
        assert_eq!(
            state.pending_filter_values.get(&Key::Name),
            Some(&FilterValue::Text("alien".to_string()))
        );
        assert!(!state.is_filter_drawer_open);
    }

    #[test]
    fn test_opening_drawer_seeds_pending() {
        let state = apply(
            State::new(Order::NameAsc),
            vec![
                set_name("alien"),
                ListAction::CommitFilters,
                set_name("stale draft"),
                ListAction::ToggleFilterDrawer,
            ],
        );
        assert!(state.is_filter_drawer_open);
        assert_eq!(
            state.pending_filter_values.value(),
            state.applied_filter_values.value()
        );

        let closed = reducer(state, ListAction::ToggleFilterDrawer);
        assert!(!closed.is_filter_drawer_open);
    }

    #[test]
    fn test_show_more_and_sort_reset() {
        let state = apply(
            State::with_increment(Order::NameAsc, 10),
            vec![ListAction::ShowMore, ListAction::ShowMore],
        );
        assert_eq!(state.show_count, 30);

        let state = reducer(state, ListAction::SetSort(Order::NameDesc));
        assert_eq!(state.sort, Order::NameDesc);
        assert_eq!(state.show_count, 10);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("name-desc".parse::<Order>().unwrap(), Order::NameDesc);
        assert_eq!(Order::NameAsc.to_string(), "name-asc");
        assert!(matches!(
            "grade-sideways".parse::<Order>(),
            Err(AppError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn test_filter_key_shapes() {
        assert_eq!(Key::Year.name(), "year");
        assert!(Key::Year.accepts(&FilterValue::Range(1990, 1999)));
        assert!(!Key::Year.accepts(&FilterValue::Text("1990".to_string())));
    }

    #[test]
    #[should_panic(expected = "does not accept")]
    #[cfg(debug_assertions)]
    fn test_malformed_payload_panics_in_debug() {
        reducer(
            State::new(Order::NameAsc),
            ListAction::SetPendingFilter {
                name: Key::Year,
                value: Some(FilterValue::Text("nineties".to_string())),
            },
        );
    }
}
