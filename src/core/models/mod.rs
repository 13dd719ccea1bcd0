mod book_summary;
mod category;
mod search_query;
mod search_state;
mod user_settings;

pub use book_summary::BookSummary;
pub use category::Category;
pub use search_query::SearchQuery;
pub use search_state::{FetchMode, SearchPhase, SearchState};
pub use user_settings::{ThemeMode, UserSettings};
