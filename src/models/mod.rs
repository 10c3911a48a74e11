use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod cast_member;
mod collection;
mod title;

pub use cast_member::{CastMember, CreditKind};
pub use collection::Collection;
pub use title::{Title, WatchlistTitle};

/// Letter grade given in a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Ordinal used for sorting and range filters: A+ is 13, F is 1.
    pub fn value(self) -> i32 {
        match self {
            Grade::APlus => 13,
            Grade::A => 12,
            Grade::AMinus => 11,
            Grade::BPlus => 10,
            Grade::B => 9,
            Grade::BMinus => 8,
            Grade::CPlus => 7,
            Grade::C => 6,
            Grade::CMinus => 5,
            Grade::DPlus => 4,
            Grade::D => 3,
            Grade::DMinus => 2,
            Grade::F => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_serde() {
        let json = serde_json::to_string(&Grade::BMinus).unwrap();
        assert_eq!(json, "\"B-\"");

        let grade: Grade = serde_json::from_str("\"A+\"").unwrap();
        assert_eq!(grade, Grade::APlus);
    }

    #[test]
    fn test_grade_value_order() {
        assert!(Grade::APlus.value() > Grade::A.value());
        assert!(Grade::DMinus.value() > Grade::F.value());
        assert_eq!(Grade::F.value(), 1);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(format!("{}", Grade::CPlus), "C+");
    }
}
