use crate::core::models::{BookSummary, Category, SearchQuery};

/// Whether a response replaces the visible list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Replace,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    LoadingMore,
    Loaded,
}

/// The whole interaction state as one explicit value, transitioned by
/// discrete events instead of ad hoc mutation.
///
/// `generation` identifies one search session (one term/category pair).
/// Editing the term or picking a category bumps it; a response tagged with
/// an older generation is discarded on arrival. Pagination requests share
/// the session generation, so several in-flight "load more" responses all
/// append.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub term: String,
    pub category: Category,
    pub page: u32,
    pub results: Vec<BookSummary>,
    pub generation: u64,
    pub phase: SearchPhase,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            term: String::new(),
            category: Category::default(),
            page: 1,
            results: Vec::new(),
            generation: 0,
            phase: SearchPhase::Idle,
        }
    }

    /// The term was edited. Starts a fresh session and returns the query
    /// to issue, or None when the term is blank (the list is cleared and
    /// no request goes out).
    pub fn begin_search(&mut self, term: String) -> Option<SearchQuery> {
        self.term = term;
        self.start_session()
    }

    /// A category was picked. Same session rules as an edited term.
    pub fn select_category(&mut self, category: Category) -> Option<SearchQuery> {
        self.category = category;
        self.start_session()
    }

    /// "Load more" was pressed. Returns the next-page query, or None when
    /// there is nothing on screen to extend.
    pub fn advance_page(&mut self) -> Option<SearchQuery> {
        if self.results.is_empty() {
            log::warn!("[SEARCH_STATE] load more requested with no results on screen");
            return None;
        }

        self.page += 1;
        self.phase = SearchPhase::LoadingMore;
        Some(SearchQuery::for_page(&self.term, self.category, self.page))
    }

    /// A response arrived. Returns false when it belonged to a superseded
    /// session and was dropped.
    pub fn apply_response(
        &mut self,
        generation: u64,
        mode: FetchMode,
        items: Vec<BookSummary>,
    ) -> bool {
        if generation != self.generation {
            log::warn!(
                "[SEARCH_STATE] dropping stale response (generation {} != current {})",
                generation,
                self.generation
            );
            return false;
        }

        // An empty page clears the list even mid-pagination.
        if items.is_empty() {
            self.results.clear();
        } else {
            match mode {
                FetchMode::Replace => self.results = items,
                FetchMode::Append => self.results.extend(items),
            }
        }

        self.phase = SearchPhase::Loaded;
        true
    }

    /// The request for this session failed. The visible list is left
    /// exactly as it was.
    pub fn fetch_failed(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.phase = if self.term.trim().is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Loaded
        };
    }

    fn start_session(&mut self) -> Option<SearchQuery> {
        self.generation += 1;
        self.page = 1;

        if self.term.trim().is_empty() {
            self.results.clear();
            self.phase = SearchPhase::Idle;
            return None;
        }

        self.phase = SearchPhase::Loading;
        Some(SearchQuery::first_page(&self.term, self.category))
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
