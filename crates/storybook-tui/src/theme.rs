use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Surfaces
    pub backdrop: Color,
    pub paper: Color,
    pub card: Color,
    pub letter: Color,
    pub canvas: Color,
    pub footer: Color,
    pub button: Color,
    pub shadow: Color,

    // Text
    pub ink: Color,
    pub ink_soft: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub error: Color,
    pub loading: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::default_theme()
    }
}
