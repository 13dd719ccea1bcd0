/// Minimal display projection of one search result. Lives for the current
/// render cycle only; replaced wholesale on a new search, extended on
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail: Option<String>,
}

impl BookSummary {
    pub fn joined_authors(&self) -> String {
        self.authors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_authors_comma_separates_multiple_authors() {
        let summary = BookSummary {
            id: "abc".to_string(),
            title: "Some Title".to_string(),
            authors: vec!["First Author".to_string(), "Second Author".to_string()],
            thumbnail: None,
        };

        assert_eq!(summary.joined_authors(), "First Author, Second Author");
    }

    #[test]
    fn test_joined_authors_empty_when_no_authors() {
        let summary = BookSummary {
            id: "abc".to_string(),
            title: "Some Title".to_string(),
            authors: vec![],
            thumbnail: None,
        };

        assert_eq!(summary.joined_authors(), "");
    }
}
