use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{GoogleBooksProvider, HttpThumbnailFetcher};
use crate::core::models::UserSettings;
use crate::core::orchestrators::search_orchestrator::{SearchMessage, SearchOrchestrator};

pub struct BookSearchApp {
    orchestrator: SearchOrchestrator,
}

impl BookSearchApp {
    pub fn build() -> (Self, Task<SearchMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|error| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", error);
            UserSettings::default()
        });

        let search_provider = Arc::new(GoogleBooksProvider::new(settings.search_endpoint.clone()));
        let thumbnail_fetcher = Arc::new(HttpThumbnailFetcher::new());

        let orchestrator = SearchOrchestrator::build(search_provider, thumbnail_fetcher, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: SearchMessage) -> Task<SearchMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, SearchMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }
}
