use std::borrow::Borrow;
use std::collections::BTreeMap;

use super::compare::fold;

/// Sentinel choice meaning "don't filter on this field".
pub const ALL: &str = "All";

pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Inclusive range filter. Records whose field is `None` never pass.
pub fn range_filter<T, V, F>(criterion: Option<(V, V)>, field: F) -> Option<Predicate<T>>
where
    T: 'static,
    V: PartialOrd + 'static,
    F: Fn(&T) -> Option<V> + 'static,
{
    let (from, to) = criterion?;
    debug_assert!(from <= to, "range filter bounds are inverted");
    Some(Box::new(move |record| {
        field(record).is_some_and(|value| from <= value && value <= to)
    }))
}

/// Exact-choice filter; `None` or [`ALL`] means no filter.
pub fn choice_filter<T, F>(criterion: Option<&str>, matches: F) -> Option<Predicate<T>>
where
    T: 'static,
    F: Fn(&T, &str) -> bool + 'static,
{
    let choice = criterion.filter(|choice| *choice != ALL)?.to_string();
    Some(Box::new(move |record| matches(record, &choice)))
}

/// Multi-select filter: the field must contain every selected value.
pub fn all_of_filter<T, F>(criterion: Option<&[String]>, field: F) -> Option<Predicate<T>>
where
    T: 'static,
    F: Fn(&T) -> &[String] + 'static,
{
    let selected = criterion.filter(|selected| !selected.is_empty())?.to_vec();
    Some(Box::new(move |record| {
        let values = field(record);
        selected.iter().all(|wanted| values.contains(wanted))
    }))
}

/// Case- and accent-insensitive substring filter. Blank text means no filter.
pub fn text_filter<T, F>(criterion: Option<&str>, field: F) -> Option<Predicate<T>>
where
    T: 'static,
    F: Fn(&T) -> &str + 'static,
{
    let needle = fold(criterion.map(str::trim).filter(|text| !text.is_empty())?);
    Some(Box::new(move |record| fold(field(record)).contains(&needle)))
}

/// Named predicates combined with logical AND.
pub struct Filters<T> {
    predicates: BTreeMap<&'static str, Predicate<T>>,
}

impl<T> Default for Filters<T> {
    fn default() -> Self {
        Self {
            predicates: BTreeMap::new(),
        }
    }
}

impl<T> std::fmt::Debug for Filters<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.predicates.keys()).finish()
    }
}

impl<T> Filters<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `predicate` under `name`; `None` registers nothing.
    pub fn insert(&mut self, name: &'static str, predicate: Option<Predicate<T>>) {
        if let Some(predicate) = predicate {
            self.predicates.insert(name, predicate);
        }
    }

    pub fn with(mut self, name: &'static str, predicate: Option<Predicate<T>>) -> Self {
        self.insert(name, predicate);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predicates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every predicate passes. All predicates run.
    pub fn matches(&self, record: &T) -> bool {
        self.predicates
            .values()
            .fold(true, |keep, predicate| predicate(record) & keep)
    }
}

/// Keeps the values every filter accepts, in their original order.
pub fn apply_filters<T, V>(values: impl IntoIterator<Item = V>, filters: &Filters<T>) -> Vec<V>
where
    V: Borrow<T>,
{
    values
        .into_iter()
        .filter(|value| filters.matches(value.borrow()))
        .collect()
}
