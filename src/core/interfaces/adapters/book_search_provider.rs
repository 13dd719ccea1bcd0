use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{BookSummary, SearchQuery};

#[async_trait]
pub trait BookSearchProvider: Send + Sync {
    async fn search_volumes(&self, query: &SearchQuery) -> Result<Vec<BookSummary>>;
}
