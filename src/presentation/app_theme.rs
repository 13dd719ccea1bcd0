use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.09),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.098, 0.529, 0.329))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.098, 0.529, 0.329),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.122, 0.655, 0.408))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.122, 0.655, 0.408),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.078, 0.420, 0.263))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.078, 0.420, 0.263),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.25, 0.25, 0.25))),
            text_color: Color::from_rgb(0.7, 0.7, 0.7),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.35, 0.35, 0.35))),
            text_color: Color::from_rgb(0.9, 0.9, 0.9),
            border: Border {
                color: Color::from_rgb(0.5, 0.5, 0.5),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
            text_color: Color::from_rgb(0.8, 0.8, 0.8),
            border: Border {
                color: Color::from_rgb(0.35, 0.35, 0.35),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
            text_color: Color::from_rgb(0.4, 0.4, 0.4),
            border: Border {
                color: Color::from_rgb(0.3, 0.3, 0.3),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        },
    }
}
