use std::collections::HashMap;

use iced::widget::{
    button, column, container, image, pick_list, row, scrollable, text, text_input, Space,
};
use iced::{Alignment, Background, Color, Element, Length};

use crate::core::models::{BookSummary, Category, SearchPhase, SearchState};
use crate::core::orchestrators::search_orchestrator::SearchMessage;
use crate::global_constants;
use crate::presentation::app_theme;

const THUMBNAIL_WIDTH: f32 = 64.0;
const THUMBNAIL_HEIGHT: f32 = 88.0;

pub fn render<'a>(
    state: &'a SearchState,
    thumbnails: &'a HashMap<String, image::Handle>,
) -> Element<'a, SearchMessage> {
    let title = text("Search For Book").size(32);

    let theme_toggle = button(text("◐").size(16))
        .padding([6, 12])
        .style(app_theme::secondary_button_style)
        .on_press(SearchMessage::ToggleTheme);

    let header_row = row![title, Space::new(Length::Fill, 0.0), theme_toggle]
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let search_input = text_input(global_constants::SEARCH_INPUT_PLACEHOLDER, &state.term)
        .on_input(SearchMessage::TermChanged)
        .padding(12)
        .size(16);

    let category_row = row![
        text("Categories").size(15),
        pick_list(
            Category::ALL,
            Some(state.category),
            SearchMessage::CategorySelected,
        )
        .padding([8, 12]),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content = column![
        header_row,
        Space::new(0.0, 12.0),
        search_input,
        Space::new(0.0, 8.0),
        category_row,
        Space::new(0.0, 8.0),
        render_status(state),
        Space::new(0.0, 8.0),
        render_results(state, thumbnails),
    ]
    .padding(24)
    .width(Length::Fill)
    .height(Length::Fill);

    if !state.results.is_empty() {
        let load_more = button(text(global_constants::LOAD_MORE_LABEL).size(15))
            .padding([12, 32])
            .style(app_theme::primary_button_style)
            .on_press(SearchMessage::LoadMore);

        content = content.push(
            container(load_more)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding([12, 0]),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn render_status(state: &SearchState) -> Element<'_, SearchMessage> {
    let (status_color, status_text) = match state.phase {
        SearchPhase::Idle => (
            Color::from_rgba(0.5, 0.5, 0.5, 1.0),
            global_constants::IDLE_STATUS_HINT.to_string(),
        ),
        SearchPhase::Loading => (Color::from_rgb(1.0, 0.8, 0.2), "Searching...".to_string()),
        SearchPhase::LoadingMore => (
            Color::from_rgb(1.0, 0.8, 0.2),
            "Loading more...".to_string(),
        ),
        SearchPhase::Loaded => {
            if state.results.is_empty() {
                (
                    Color::from_rgba(0.6, 0.6, 0.6, 1.0),
                    "No results found".to_string(),
                )
            } else {
                (
                    Color::from_rgb(0.2, 0.8, 0.4),
                    format!("{} results", state.results.len()),
                )
            }
        }
    };

    let indicator = row![
        text("●")
            .size(12)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(status_color),
            }),
        text(status_text)
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(indicator).into()
}

fn render_results<'a>(
    state: &'a SearchState,
    thumbnails: &'a HashMap<String, image::Handle>,
) -> Element<'a, SearchMessage> {
    let cards = state
        .results
        .iter()
        .fold(column![].spacing(10), |list, book| {
            list.push(render_book_card(book, thumbnails.get(&book.id)))
        });

    scrollable(cards.width(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn render_book_card<'a>(
    book: &'a BookSummary,
    thumbnail: Option<&'a image::Handle>,
) -> Element<'a, SearchMessage> {
    let cover: Element<'a, SearchMessage> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(THUMBNAIL_WIDTH))
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .into(),
        None => container(text("📖").size(28))
            .width(Length::Fixed(THUMBNAIL_WIDTH))
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .center_x(Length::Fixed(THUMBNAIL_WIDTH))
            .center_y(Length::Fixed(THUMBNAIL_HEIGHT))
            .style(|_theme| iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.15))),
                ..Default::default()
            })
            .into(),
    };

    let details = column![
        text(&book.title).size(16),
        text(book.joined_authors())
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            }),
    ]
    .spacing(4);

    let card = row![cover, details]
        .spacing(16)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    container(card)
        .padding(12)
        .width(Length::Fill)
        .style(|_theme| iced::widget::container::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.08))),
            border: iced::Border {
                color: Color::from_rgba(0.5, 0.5, 0.5, 0.2),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
