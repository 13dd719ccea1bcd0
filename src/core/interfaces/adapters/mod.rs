mod book_search_provider;
mod thumbnail_fetcher;

pub use book_search_provider::BookSearchProvider;
pub use thumbnail_fetcher::ThumbnailFetcher;
