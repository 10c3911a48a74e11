use serde::{Deserialize, Serialize};

use super::collection::slugify;

/// Role a person is credited with on a reviewed title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditKind {
    Director,
    Performer,
    Writer,
}

impl CreditKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CreditKind::Director => "director",
            CreditKind::Performer => "performer",
            CreditKind::Writer => "writer",
        }
    }
}

/// A director, performer or writer with reviewed credits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub slug: String,
    pub name: String,
    /// Number of reviewed titles with this person's credit
    pub review_count: u32,
    #[serde(default)]
    pub credited_as: Vec<CreditKind>,
}

impl CastMember {
    pub fn new(name: &str, review_count: u32, credited_as: Vec<CreditKind>) -> Self {
        Self {
            slug: slugify(name),
            name: name.to_string(),
            review_count,
            credited_as,
        }
    }

    pub fn is_credited_as(&self, kind: &str) -> bool {
        self.credited_as.iter().any(|credit| credit.as_str() == kind)
    }
}
