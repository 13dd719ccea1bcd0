#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

#[cfg(test)]
mod app_theme_tests;

use iced::application;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Book Search application");

    application(
        global_constants::APPLICATION_TITLE,
        app::BookSearchApp::handle_update,
        app::BookSearchApp::render_view,
    )
    .theme(app::BookSearchApp::theme)
    .window_size(iced::Size::new(700.0, 800.0))
    .run_with(app::BookSearchApp::build)
}
