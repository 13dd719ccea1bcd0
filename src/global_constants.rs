#![allow(dead_code)]

pub const APPLICATION_TITLE: &str = "Book Search";

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Fixed page size of the external result set.
pub const RESULTS_PER_PAGE: u32 = 5;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const SEARCH_INPUT_PLACEHOLDER: &str = "Enter book title";
pub const LOAD_MORE_LABEL: &str = "LOAD MORE";
pub const IDLE_STATUS_HINT: &str = "Type a title to start searching";
