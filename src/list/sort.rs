use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Sort table mapping each sort key to a comparator.
///
/// Keys missing from the table use the fallback comparator. Unless replaced
/// with [`Sorter::with_fallback`], the fallback treats every pair as equal,
/// which under the stable sort leaves the input order untouched.
pub struct Sorter<T, K> {
    table: HashMap<K, Comparator<T>>,
    fallback: Comparator<T>,
}

impl<T, K> Default for Sorter<T, K>
where
    T: 'static,
    K: Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Sorter<T, K>
where
    T: 'static,
    K: Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            fallback: Box::new(|_, _| Ordering::Equal),
        }
    }

    pub fn with<F>(mut self, key: K, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.table.insert(key, Box::new(comparator));
        self
    }

    pub fn with_fallback<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.fallback = Box::new(comparator);
        self
    }

    pub fn handles(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Comparator for `key`, or the fallback.
    pub fn comparator(&self, key: &K) -> &dyn Fn(&T, &T) -> Ordering {
        match self.table.get(key) {
            Some(comparator) => comparator.as_ref(),
            None => {
                tracing::debug!(sort = ?key, "No comparator for sort key, using fallback");
                self.fallback.as_ref()
            }
        }
    }

    /// Stable sort of `values` by `key`.
    pub fn sort<V>(&self, mut values: Vec<V>, key: &K) -> Vec<V>
    where
        V: Borrow<T>,
    {
        let comparator = self.comparator(key);
        values.sort_by(|a, b| comparator(a.borrow(), b.borrow()));
        values
    }
}

/// Flips a comparator. Ties stay ties, so stability is preserved.
pub fn descending<T, F>(comparator: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    move |a, b| comparator(b, a)
}
