use crate::core::models::Category;
use crate::global_constants;

/// One concrete request against the volumes endpoint: the free-text term,
/// the subject filter, and which page of results to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub category: Category,
    pub page: u32,
}

impl SearchQuery {
    pub fn first_page(term: &str, category: Category) -> Self {
        Self {
            term: term.to_string(),
            category,
            page: 1,
        }
    }

    pub fn for_page(term: &str, category: Category, page: u32) -> Self {
        Self {
            term: term.to_string(),
            category,
            page: page.max(1),
        }
    }

    /// Offset into the external result set. Page 1 carries no offset at
    /// all, matching the query shape the endpoint expects for a fresh
    /// search.
    pub fn start_index(&self) -> Option<u32> {
        if self.page <= 1 {
            None
        } else {
            Some((self.page - 1) * global_constants::RESULTS_PER_PAGE)
        }
    }
}
