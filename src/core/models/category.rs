use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of subject filters offered by the category pick list. `All`
/// stands for "no filter" and never reaches the outgoing query, so invalid
/// subject values are unrepresentable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    All,
    Art,
    Biography,
    Computers,
    History,
    Medical,
    Poetry,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Art,
        Category::Biography,
        Category::Computers,
        Category::History,
        Category::Medical,
        Category::Poetry,
    ];

    /// Subject key for the outgoing query, or None when no filter applies.
    pub fn subject_key(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Art => Some("art"),
            Category::Biography => Some("biography"),
            Category::Computers => Some("computers"),
            Category::History => Some("history"),
            Category::Medical => Some("medical"),
            Category::Poetry => Some("poetry"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => write!(f, "All"),
            Category::Art => write!(f, "Art"),
            Category::Biography => write!(f, "Biography"),
            Category::Computers => write!(f, "Computers"),
            Category::History => write!(f, "History"),
            Category::Medical => write!(f, "Medical"),
            Category::Poetry => write!(f, "Poetry"),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_all() {
        assert_eq!(Category::default(), Category::All);
    }

    #[test]
    fn test_all_has_no_subject_key() {
        assert_eq!(Category::All.subject_key(), None);
    }

    #[test]
    fn test_subject_keys_are_lowercase_labels() {
        assert_eq!(Category::Art.subject_key(), Some("art"));
        assert_eq!(Category::Biography.subject_key(), Some("biography"));
        assert_eq!(Category::Computers.subject_key(), Some("computers"));
        assert_eq!(Category::History.subject_key(), Some("history"));
        assert_eq!(Category::Medical.subject_key(), Some("medical"));
        assert_eq!(Category::Poetry.subject_key(), Some("poetry"));
    }

    #[test]
    fn test_all_variants_are_listed_for_the_pick_list() {
        assert_eq!(Category::ALL.len(), 7);
        assert_eq!(Category::ALL[0], Category::All);
    }

    #[test]
    fn test_category_serialization_roundtrip() {
        let serialized = serde_json::to_string(&Category::Poetry).unwrap();
        let deserialized: Category = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Category::Poetry);
    }
}
