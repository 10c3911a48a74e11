use std::sync::Arc;

use super::filter::{apply_filters, Filters};
use super::group::{group_by, Groups};
use super::memo::{Memo, Versioned};
use super::sort::Sorter;
use super::state::{FilterKey, FilterValues, ListState, SortKey};

/// Everything that distinguishes one browsable list from another.
pub trait ListKind {
    type Record: Clone + 'static;
    type Filter: FilterKey;
    type Sort: SortKey;

    const DEFAULT_SORT: Self::Sort;

    fn sorter() -> Sorter<Self::Record, Self::Sort>;

    fn build_filters(values: &FilterValues<Self::Filter>) -> Filters<Self::Record>;

    /// Section heading for `record` under `sort`; empty when the ordering has
    /// no meaningful sections.
    fn group_for_sort(record: &Self::Record, sort: &Self::Sort) -> String;

    fn initial_state() -> ListState<Self::Filter, Self::Sort> {
        ListState::new(Self::DEFAULT_SORT)
    }
}

type ResultKey<S> = (u64, S, u64);

/// Cached filter → sort → group pipeline for one list view.
///
/// Inputs are compared by version only; pass a new `Versioned` (or mutate one
/// through its API) when the records genuinely change.
pub struct ListView<L: ListKind> {
    sorter: Sorter<L::Record, L::Sort>,
    filtered: Memo<ResultKey<L::Sort>, Arc<[L::Record]>>,
    grouped: Memo<ResultKey<L::Sort>, Arc<Groups<L::Record>>>,
    visible: Memo<(ResultKey<L::Sort>, usize), Arc<Groups<L::Record>>>,
    pending: Memo<(u64, u64), usize>,
}

impl<L: ListKind> Default for ListView<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ListKind> ListView<L> {
    pub fn new() -> Self {
        Self {
            sorter: L::sorter(),
            filtered: Memo::new(),
            grouped: Memo::new(),
            visible: Memo::new(),
            pending: Memo::new(),
        }
    }

    fn result_key(
        records: &Versioned<Vec<L::Record>>,
        state: &ListState<L::Filter, L::Sort>,
    ) -> ResultKey<L::Sort> {
        (
            records.version(),
            state.sort,
            state.applied_filter_values.version(),
        )
    }

    /// Records passing the applied filters, in applied sort order.
    pub fn filtered(
        &mut self,
        records: &Versioned<Vec<L::Record>>,
        state: &ListState<L::Filter, L::Sort>,
    ) -> Arc<[L::Record]> {
        let key = Self::result_key(records, state);
        let sorter = &self.sorter;
        self.filtered.get_or_compute(key, || {
            let filters = L::build_filters(&state.applied_filter_values);
            let kept = apply_filters(records.iter(), &filters);
            let sorted = sorter.sort(kept, &state.sort);
            tracing::debug!(
                sort = state.sort.as_str(),
                filters = ?filters,
                total = records.len(),
                kept = sorted.len(),
                "Recomputed filtered list"
            );
            sorted.into_iter().cloned().collect()
        })
    }

    /// [`ListView::filtered`] split into sections for the applied sort.
    pub fn grouped(
        &mut self,
        records: &Versioned<Vec<L::Record>>,
        state: &ListState<L::Filter, L::Sort>,
    ) -> Arc<Groups<L::Record>> {
        let key = Self::result_key(records, state);
        let filtered = self.filtered(records, state);
        self.grouped.get_or_compute(key, || {
            Arc::new(group_by(
                filtered.iter().cloned(),
                &state.sort,
                L::group_for_sort,
            ))
        })
    }

    /// The first `show_count` filtered records, split into sections.
    pub fn visible_groups(
        &mut self,
        records: &Versioned<Vec<L::Record>>,
        state: &ListState<L::Filter, L::Sort>,
    ) -> Arc<Groups<L::Record>> {
        let key = (Self::result_key(records, state), state.show_count);
        let filtered = self.filtered(records, state);
        self.visible.get_or_compute(key, || {
            let shown = state.show_count.min(filtered.len());
            Arc::new(group_by(
                filtered[..shown].iter().cloned(),
                &state.sort,
                L::group_for_sort,
            ))
        })
    }

    /// How many records the drawer's draft filters would keep.
    pub fn pending_count(
        &mut self,
        records: &Versioned<Vec<L::Record>>,
        state: &ListState<L::Filter, L::Sort>,
    ) -> usize {
        let key = (records.version(), state.pending_filter_values.version());
        self.pending.get_or_compute(key, || {
            let filters = L::build_filters(&state.pending_filter_values);
            records.iter().filter(|record| filters.matches(record)).count()
        })
    }

    /// Whether more filtered records exist beyond `show_count`.
    pub fn has_more(
        &mut self,
        records: &Versioned<Vec<L::Record>>,
        state: &ListState<L::Filter, L::Sort>,
    ) -> bool {
        self.filtered(records, state).len() > state.show_count
    }

    pub fn computations(&self) -> u64 {
        self.filtered.computations()
    }
}
