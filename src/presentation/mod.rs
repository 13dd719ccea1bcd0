pub mod app_theme;
pub mod search_view;
