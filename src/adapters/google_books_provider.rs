use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::BookSearchProvider;
use crate::core::models::{BookSummary, SearchQuery};
use crate::global_constants;

/// Wire shape of the volumes endpoint. Everything beyond the identifier is
/// optional; absent fields are valid input, not errors.
#[derive(Deserialize, Debug)]
struct VolumesResponse {
    items: Option<Vec<VolumeItem>>,
}

#[derive(Deserialize, Debug)]
struct VolumeItem {
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Deserialize, Debug, Default)]
struct VolumeInfo {
    #[serde(default)]
    title: String,
    authors: Option<Vec<String>>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Deserialize, Debug)]
struct ImageLinks {
    thumbnail: Option<String>,
}

pub struct GoogleBooksProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleBooksProvider {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    fn construct_search_url(&self, query: &SearchQuery) -> String {
        let encoded_term = urlencoding::encode(query.term.trim());
        let mut url = format!(
            "{}?q={}&maxResults={}",
            self.endpoint,
            encoded_term,
            global_constants::RESULTS_PER_PAGE
        );

        if let Some(start_index) = query.start_index() {
            url.push_str("&startIndex=");
            url.push_str(&start_index.to_string());
        }

        if let Some(subject) = query.category.subject_key() {
            url.push_str("&subject=");
            url.push_str(subject);
        }

        url
    }

    fn map_items(response: VolumesResponse) -> Vec<BookSummary> {
        response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| BookSummary {
                id: item.id,
                title: item.volume_info.title,
                authors: item.volume_info.authors.unwrap_or_default(),
                thumbnail: item
                    .volume_info
                    .image_links
                    .and_then(|links| links.thumbnail),
            })
            .collect()
    }
}

#[async_trait]
impl BookSearchProvider for GoogleBooksProvider {
    async fn search_volumes(&self, query: &SearchQuery) -> Result<Vec<BookSummary>> {
        let request_url = self.construct_search_url(query);

        log::info!(
            "[GOOGLE_BOOKS] Searching volumes (page {} of '{}')",
            query.page,
            query.term
        );
        log::debug!("[GOOGLE_BOOKS] Request URL: {}", request_url);

        let response = self.client.get(&request_url).send().await?;
        let payload: VolumesResponse = response.json().await?;

        let summaries = Self::map_items(payload);
        log::info!("[GOOGLE_BOOKS] Received {} volumes", summaries.len());

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Category;

    fn provider() -> GoogleBooksProvider {
        GoogleBooksProvider::new(global_constants::DEFAULT_SEARCH_ENDPOINT.to_string())
    }

    #[test]
    fn test_construct_search_url_contains_term_and_fixed_page_size() {
        let query = SearchQuery::first_page("lord of the rings", Category::All);

        let url = provider().construct_search_url(&query);

        assert!(url.contains("q=lord%20of%20the%20rings"));
        assert!(url.contains("maxResults=5"));
        assert!(url.starts_with("https://www.googleapis.com/books/v1/volumes?"));
    }

    #[test]
    fn test_construct_search_url_omits_subject_for_all_category() {
        let query = SearchQuery::first_page("dune", Category::All);

        let url = provider().construct_search_url(&query);

        assert!(!url.contains("subject="));
    }

    #[test]
    fn test_construct_search_url_includes_subject_for_selected_category() {
        let query = SearchQuery::first_page("dune", Category::History);

        let url = provider().construct_search_url(&query);

        assert!(url.contains("&subject=history"));
    }

    #[test]
    fn test_construct_search_url_omits_start_index_on_first_page() {
        let query = SearchQuery::first_page("dune", Category::All);

        let url = provider().construct_search_url(&query);

        assert!(!url.contains("startIndex"));
    }

    #[test]
    fn test_construct_search_url_pagination_offset_is_page_minus_one_times_five() {
        let query = SearchQuery::for_page("dune", Category::All, 3);

        let url = provider().construct_search_url(&query);

        assert!(url.contains("&startIndex=10"));
    }

    #[test]
    fn test_construct_search_url_encodes_special_characters_in_term() {
        let query = SearchQuery::first_page("c++ & rust?", Category::All);

        let url = provider().construct_search_url(&query);

        assert!(url.contains("q=c%2B%2B%20%26%20rust%3F"));
    }

    #[test]
    fn test_map_items_projects_single_volume() {
        let payload = r#"{"items":[{"id":"1","volumeInfo":{"title":"T","authors":["A"]}}]}"#;
        let response: VolumesResponse = serde_json::from_str(payload).unwrap();

        let summaries = GoogleBooksProvider::map_items(response);

        assert_eq!(
            summaries,
            vec![BookSummary {
                id: "1".to_string(),
                title: "T".to_string(),
                authors: vec!["A".to_string()],
                thumbnail: None,
            }]
        );
    }

    #[test]
    fn test_map_items_without_items_key_is_empty() {
        let response: VolumesResponse = serde_json::from_str("{}").unwrap();

        let summaries = GoogleBooksProvider::map_items(response);

        assert!(summaries.is_empty());
    }

    #[test]
    fn test_map_items_missing_image_links_yields_absent_thumbnail() {
        let payload = r#"{"items":[{"id":"x","volumeInfo":{"title":"No Cover"}}]}"#;
        let response: VolumesResponse = serde_json::from_str(payload).unwrap();

        let summaries = GoogleBooksProvider::map_items(response);

        assert_eq!(summaries[0].thumbnail, None);
        assert!(summaries[0].authors.is_empty());
    }

    #[test]
    fn test_map_items_extracts_nested_thumbnail_url() {
        let payload = r#"{
            "items": [{
                "id": "x",
                "volumeInfo": {
                    "title": "Covered",
                    "imageLinks": {"thumbnail": "http://books.google.com/thumb.jpg"}
                }
            }]
        }"#;
        let response: VolumesResponse = serde_json::from_str(payload).unwrap();

        let summaries = GoogleBooksProvider::map_items(response);

        assert_eq!(
            summaries[0].thumbnail.as_deref(),
            Some("http://books.google.com/thumb.jpg")
        );
    }

    #[test]
    fn test_map_items_preserves_api_order_without_deduplication() {
        let payload = r#"{"items":[
            {"id":"dup","volumeInfo":{"title":"Same"}},
            {"id":"dup","volumeInfo":{"title":"Same"}}
        ]}"#;
        let response: VolumesResponse = serde_json::from_str(payload).unwrap();

        let summaries = GoogleBooksProvider::map_items(response);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, summaries[1].id);
    }

    #[tokio::test]
    async fn test_search_volumes_surfaces_transport_failure_as_error() {
        let unreachable = GoogleBooksProvider::new("http://127.0.0.1:9/volumes".to_string());
        let query = SearchQuery::first_page("dune", Category::All);

        let result = unreachable.search_volumes(&query).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_map_items_missing_title_defaults_to_empty_string() {
        let payload = r#"{"items":[{"id":"x","volumeInfo":{"authors":["A"]}}]}"#;
        let response: VolumesResponse = serde_json::from_str(payload).unwrap();

        let summaries = GoogleBooksProvider::map_items(response);

        assert_eq!(summaries[0].title, "");
    }
}
