use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::image;
use iced::{Element, Task, Theme};

use crate::core::interfaces::adapters::{BookSearchProvider, ThumbnailFetcher};
use crate::core::models::{BookSummary, Category, FetchMode, SearchQuery, SearchState, UserSettings};
use crate::presentation::{app_theme, search_view};

#[derive(Clone)]
pub enum SearchMessage {
    TermChanged(String),
    CategorySelected(Category),
    LoadMore,
    ResultsReceived {
        generation: u64,
        mode: FetchMode,
        outcome: Result<Vec<BookSummary>, String>,
    },
    ThumbnailLoaded {
        generation: u64,
        volume_id: String,
        outcome: Result<Vec<u8>, String>,
    },
    ToggleTheme,
}

// Keeps raw thumbnail bytes out of the logs.
impl std::fmt::Debug for SearchMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMessage::TermChanged(term) => write!(f, "TermChanged({})", term),
            SearchMessage::CategorySelected(category) => {
                write!(f, "CategorySelected({})", category)
            }
            SearchMessage::LoadMore => write!(f, "LoadMore"),
            SearchMessage::ResultsReceived {
                generation,
                mode,
                outcome,
            } => write!(
                f,
                "ResultsReceived(generation: {}, mode: {:?}, items: {:?})",
                generation,
                mode,
                outcome.as_ref().map(Vec::len)
            ),
            SearchMessage::ThumbnailLoaded {
                generation,
                volume_id,
                outcome,
            } => write!(
                f,
                "ThumbnailLoaded(generation: {}, volume: {}, bytes: {:?})",
                generation,
                volume_id,
                outcome.as_ref().map(Vec::len)
            ),
            SearchMessage::ToggleTheme => write!(f, "ToggleTheme"),
        }
    }
}

pub struct SearchOrchestrator {
    search_provider: Arc<dyn BookSearchProvider>,
    thumbnail_fetcher: Arc<dyn ThumbnailFetcher>,
    state: SearchState,
    thumbnails: HashMap<String, image::Handle>,
    settings: UserSettings,
}

impl SearchOrchestrator {
    pub fn build(
        search_provider: Arc<dyn BookSearchProvider>,
        thumbnail_fetcher: Arc<dyn ThumbnailFetcher>,
        settings: UserSettings,
    ) -> Self {
        Self {
            search_provider,
            thumbnail_fetcher,
            state: SearchState::new(),
            thumbnails: HashMap::new(),
            settings,
        }
    }

    pub fn update(&mut self, message: SearchMessage) -> Task<SearchMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            SearchMessage::TermChanged(term) => self.handle_term_changed(term),
            SearchMessage::CategorySelected(category) => self.handle_category_selected(category),
            SearchMessage::LoadMore => self.handle_load_more(),
            SearchMessage::ResultsReceived {
                generation,
                mode,
                outcome,
            } => self.handle_results_received(generation, mode, outcome),
            SearchMessage::ThumbnailLoaded {
                generation,
                volume_id,
                outcome,
            } => self.handle_thumbnail_loaded(generation, volume_id, outcome),
            SearchMessage::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    pub fn render_view(&self) -> Element<'_, SearchMessage> {
        search_view::render(&self.state, &self.thumbnails)
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn current_state(&self) -> &SearchState {
        &self.state
    }

    pub fn loaded_thumbnail_count(&self) -> usize {
        self.thumbnails.len()
    }

    fn handle_term_changed(&mut self, term: String) -> Task<SearchMessage> {
        match self.state.begin_search(term) {
            Some(query) => self.issue_fetch(query, FetchMode::Replace),
            None => Task::none(),
        }
    }

    fn handle_category_selected(&mut self, category: Category) -> Task<SearchMessage> {
        log::info!("[ORCHESTRATOR] Category selected: {}", category);

        match self.state.select_category(category) {
            Some(query) => self.issue_fetch(query, FetchMode::Replace),
            None => Task::none(),
        }
    }

    fn handle_load_more(&mut self) -> Task<SearchMessage> {
        match self.state.advance_page() {
            Some(query) => {
                log::info!("[ORCHESTRATOR] Loading page {}", query.page);
                self.issue_fetch(query, FetchMode::Append)
            }
            None => Task::none(),
        }
    }

    fn issue_fetch(&self, query: SearchQuery, mode: FetchMode) -> Task<SearchMessage> {
        let provider = Arc::clone(&self.search_provider);
        let generation = self.state.generation;

        Task::future(async move {
            let outcome = provider
                .search_volumes(&query)
                .await
                .map_err(|error| error.to_string());

            SearchMessage::ResultsReceived {
                generation,
                mode,
                outcome,
            }
        })
    }

    fn handle_results_received(
        &mut self,
        generation: u64,
        mode: FetchMode,
        outcome: Result<Vec<BookSummary>, String>,
    ) -> Task<SearchMessage> {
        let items = match outcome {
            Ok(items) => items,
            Err(error) => {
                // Log-only: the list the user already sees stays put.
                log::error!("[ORCHESTRATOR] Search request failed: {}", error);
                self.state.fetch_failed(generation);
                return Task::none();
            }
        };

        if !self.state.apply_response(generation, mode, items.clone()) {
            return Task::none();
        }

        if mode == FetchMode::Replace {
            self.thumbnails.clear();
        }

        self.fetch_missing_thumbnails(&items)
    }

    fn fetch_missing_thumbnails(&self, items: &[BookSummary]) -> Task<SearchMessage> {
        let generation = self.state.generation;

        let tasks: Vec<Task<SearchMessage>> = items
            .iter()
            .filter(|book| !self.thumbnails.contains_key(&book.id))
            .filter_map(|book| {
                let url = book.thumbnail.clone()?;
                let volume_id = book.id.clone();
                let fetcher = Arc::clone(&self.thumbnail_fetcher);

                Some(Task::future(async move {
                    let outcome = fetcher
                        .fetch_thumbnail(&url)
                        .await
                        .map_err(|error| error.to_string());

                    SearchMessage::ThumbnailLoaded {
                        generation,
                        volume_id,
                        outcome,
                    }
                }))
            })
            .collect();

        Task::batch(tasks)
    }

    fn handle_thumbnail_loaded(
        &mut self,
        generation: u64,
        volume_id: String,
        outcome: Result<Vec<u8>, String>,
    ) -> Task<SearchMessage> {
        if generation != self.state.generation {
            log::debug!(
                "[ORCHESTRATOR] Dropping thumbnail for superseded search: {}",
                volume_id
            );
            return Task::none();
        }

        match outcome {
            Ok(bytes) => {
                self.thumbnails
                    .insert(volume_id, image::Handle::from_bytes(bytes));
            }
            Err(error) => {
                log::warn!(
                    "[ORCHESTRATOR] Thumbnail fetch failed for {}: {}",
                    volume_id,
                    error
                );
            }
        }

        Task::none()
    }

    fn handle_toggle_theme(&mut self) -> Task<SearchMessage> {
        self.settings.theme_mode = self.settings.theme_mode.toggled();
        log::info!("[ORCHESTRATOR] Theme switched to {}", self.settings.theme_mode);

        if let Err(error) = self.settings.save() {
            log::error!("[ORCHESTRATOR] Failed to save settings: {}", error);
        }

        Task::none()
    }
}
