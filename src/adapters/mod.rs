mod google_books_provider;
mod http_thumbnail_fetcher;

pub use google_books_provider::GoogleBooksProvider;
pub use http_thumbnail_fetcher::HttpThumbnailFetcher;
