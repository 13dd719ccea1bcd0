use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ThumbnailFetcher: Send + Sync {
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>>;
}
