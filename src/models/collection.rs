use serde::{Deserialize, Serialize};

/// A named grouping of reviewed titles (a franchise, a series, a theme)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub slug: String,
    pub name: String,
    /// Number of reviewed titles in the collection
    pub review_count: u32,
}

impl Collection {
    pub fn new(name: &str, review_count: u32) -> Self {
        Self {
            slug: slugify(name),
            name: name.to_string(),
            review_count,
        }
    }
}

/// Lowercase, hyphen-separated form of a name, as used in catalog slugs.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for word in crate::list::fold(name)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    slug
}
