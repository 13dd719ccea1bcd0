use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ThumbnailFetcher;

/// Fetches cover thumbnail bytes over plain GET. The browser did this
/// implicitly for the web version; a native client has to ask for the
/// bytes itself.
pub struct HttpThumbnailFetcher {
    client: reqwest::Client,
}

impl HttpThumbnailFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ThumbnailFetcher for HttpThumbnailFetcher {
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[THUMBNAIL] Fetching cover from {}", url);

        let response = self.client.get(url).send().await?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}
