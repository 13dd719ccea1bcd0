#[cfg(test)]
mod tests {
    use crate::core::models::ThemeMode;
    use crate::presentation::app_theme::*;
    use iced::widget::button;
    use iced::{Background, Color, Theme};

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.07, 0.07, 0.09));
        assert_eq!(palette.text, Color::from_rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_primary_button_style_active_has_green_background() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.098, 0.529, 0.329));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_hovered_is_lighter_green() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Hovered);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.122, 0.655, 0.408));
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn test_primary_button_style_disabled_is_gray() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Disabled);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.3, 0.3, 0.3));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_button_styles_have_consistent_border_radius() {
        let theme = Theme::Dark;

        let primary_active = primary_button_style(&theme, button::Status::Active);
        let secondary_active = secondary_button_style(&theme, button::Status::Active);

        assert_eq!(primary_active.border.radius, 6.0.into());
        assert_eq!(secondary_active.border.radius, 6.0.into());
    }

    #[test]
    fn test_button_styles_use_no_shadows() {
        let theme = Theme::Dark;

        let active_style = primary_button_style(&theme, button::Status::Active);
        let hover_style = primary_button_style(&theme, button::Status::Hovered);

        assert_eq!(active_style.shadow.blur_radius, 0.0);
        assert_eq!(hover_style.shadow.blur_radius, 0.0);
    }
}
