//! Theming system for Niwa

use ratatui::style::Color;

/// A color theme for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_soft: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Theme {
    /// The default washi-paper palette: ink on paper, wasabi green and
    /// Japanese indigo accents, sakura pink highlights
    pub fn paper() -> Self {
        Self {
            name: "Paper Garden".to_string(),
            bg_primary: Color::Rgb(245, 245, 244),
            bg_secondary: Color::Rgb(231, 229, 228),
            fg_primary: Color::Rgb(28, 25, 23),
            fg_secondary: Color::Rgb(87, 83, 78),
            fg_muted: Color::Rgb(168, 162, 158),
            accent_primary: Color::Rgb(116, 159, 118),
            accent_secondary: Color::Rgb(43, 79, 123),
            accent_soft: Color::Rgb(249, 168, 212),
            success: Color::Rgb(93, 141, 98),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(185, 28, 28),
            border: Color::Rgb(214, 211, 209),
            border_focused: Color::Rgb(43, 79, 123),
            selection: Color::Rgb(224, 231, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::paper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_paper_garden() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Paper Garden");
    }
}
