use std::collections::HashMap;

/// Bucket used for names that do not start with a cased letter.
pub const OTHER_GROUP: char = '#';

/// First letter of `s`, uppercased, or `#` when that character has no case
/// (digits, symbols, uncased scripts) or `s` is empty.
pub fn group_letter(s: &str) -> char {
    let Some(first) = s.chars().next() else {
        return OTHER_GROUP;
    };
    if !(first.is_lowercase() || first.is_uppercase()) {
        return OTHER_GROUP;
    }
    first.to_uppercase().next().unwrap_or(OTHER_GROUP)
}

/// Values bucketed by group key, iterating groups in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Groups<V> {
    entries: Vec<(String, Vec<V>)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Groups<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> Groups<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to group `key`, creating the group at the end if new.
    pub fn push(&mut self, key: String, value: V) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values across all groups.
    pub fn total_len(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }
}

/// Buckets `values` by `group_fn(value, sort)` in a single pass.
///
/// Groups come out in the order their keys first appear, not alphabetically,
/// so callers wanting alphabetical sections sort by the same key first.
pub fn group_by<V, K, F>(values: impl IntoIterator<Item = V>, sort: &K, group_fn: F) -> Groups<V>
where
    F: Fn(&V, &K) -> String,
{
    let mut groups = Groups::new();
    for value in values {
        let key = group_fn(&value, sort);
        groups.push(key, value);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_letter() {
        assert_eq!(group_letter("apple"), 'A');
        assert_eq!(group_letter("Banana"), 'B');
        assert_eq!(group_letter("émile"), 'É');
        assert_eq!(group_letter("123"), '#');
        assert_eq!(group_letter("...And Justice"), '#');
        assert_eq!(group_letter("七人の侍"), '#');
        assert_eq!(group_letter(""), '#');
    }

    #[test]
    fn test_group_letter_multi_char_uppercase() {
        assert_eq!(group_letter("ßtraße"), 'S');
    }

    #[test]
    fn test_group_by_first_seen_order() {
        let names = ["Brazil", "Alien", "Babe", "Aliens", "9"];
        let groups = group_by(names, &(), |name, _| group_letter(name).to_string());

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["B", "A", "#"]);
        assert_eq!(groups.get("B"), Some(&["Brazil", "Babe"][..]));
        assert_eq!(groups.get("A"), Some(&["Alien", "Aliens"][..]));
        assert_eq!(groups.get("#"), Some(&["9"][..]));
        assert_eq!(groups.get("Z"), None);
        assert_eq!(groups.total_len(), 5);
    }

    #[test]
    fn test_group_by_uses_sort_key() {
        let values = [1, 2, 3, 4];
        let by_parity = group_by(values, &true, |v, split| {
            if *split {
                (v % 2).to_string()
            } else {
                String::new()
            }
        });
        assert_eq!(by_parity.len(), 2);

        let single = group_by(values, &false, |_, _| String::new());
        assert_eq!(single.len(), 1);
        assert_eq!(single.get(""), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn test_group_by_empty() {
        let groups = group_by(Vec::<&str>::new(), &(), |_, _| String::new());
        assert!(groups.is_empty());
        assert_eq!(groups.total_len(), 0);
    }
}
