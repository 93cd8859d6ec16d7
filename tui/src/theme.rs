//! Theme system for lexigrid.
//!
//! Provides preset color schemes that can be selected by the user.

use ratatui::style::Color;

/// A color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier for the theme, stored in preferences.
    pub id: &'static str,
    /// Display name for the theme.
    pub name: &'static str,

    // Semantic colors
    /// Primary color for selected items, cursor, action keys.
    pub primary: Color,
    /// Secondary color for titles and clue numbers.
    pub secondary: Color,
    /// Normal text content.
    pub text: Color,
    /// Dimmed text for descriptions, inactive items.
    pub dimmed: Color,
    /// Success indicators (completion, print notification).
    pub success: Color,
    /// Error indicators.
    pub error: Color,

    // Grid colors
    /// Box-drawing characters for grid borders.
    pub grid_border: Color,
    /// Background color for blocked cells.
    pub filled_cell_bg: Color,
    /// Foreground color for blocked cell rendering.
    pub filled_cell_fg: Color,
    /// Letters checked as correct.
    pub correct: Color,
    /// Letters checked as incorrect.
    pub incorrect: Color,
    /// The focused cell and the active clue in the clue list.
    pub accent: Color,
    /// Background of the cells in the active clue.
    pub word_bg: Color,
}

/// Cyan-on-midnight neon, the default.
pub const CYBER_WAVE: Theme = Theme {
    id: "cyber-wave",
    name: "Cyber Wave",
    primary: Color::Rgb(0, 229, 255),
    secondary: Color::Rgb(255, 0, 170),
    text: Color::Rgb(224, 247, 250),
    dimmed: Color::Rgb(96, 125, 139),
    success: Color::Rgb(118, 255, 3),
    error: Color::Rgb(255, 82, 82),
    grid_border: Color::Rgb(0, 151, 167),
    filled_cell_bg: Color::Rgb(10, 14, 39),
    filled_cell_fg: Color::Rgb(26, 35, 126),
    correct: Color::Rgb(118, 255, 3),
    incorrect: Color::Rgb(255, 82, 82),
    accent: Color::Rgb(255, 0, 170),
    word_bg: Color::Rgb(38, 50, 92),
};

/// Pastel pink and teal sunset.
pub const VAPORWAVE: Theme = Theme {
    id: "vaporwave",
    name: "Vaporwave",
    primary: Color::Rgb(255, 113, 206),
    secondary: Color::Rgb(1, 205, 254),
    text: Color::Rgb(255, 240, 250),
    dimmed: Color::Rgb(150, 120, 170),
    success: Color::Rgb(5, 255, 161),
    error: Color::Rgb(255, 95, 95),
    grid_border: Color::Rgb(185, 103, 255),
    filled_cell_bg: Color::Rgb(36, 18, 54),
    filled_cell_fg: Color::Rgb(77, 40, 110),
    correct: Color::Rgb(5, 255, 161),
    incorrect: Color::Rgb(255, 95, 95),
    accent: Color::Rgb(1, 205, 254),
    word_bg: Color::Rgb(70, 40, 100),
};

/// Moss, mushroom and linen.
pub const COTTAGECORE: Theme = Theme {
    id: "cottagecore",
    name: "Cottagecore",
    primary: Color::Rgb(196, 129, 74),
    secondary: Color::Rgb(120, 150, 90),
    text: Color::Rgb(245, 236, 215),
    dimmed: Color::Rgb(150, 140, 120),
    success: Color::Rgb(134, 179, 94),
    error: Color::Rgb(200, 90, 70),
    grid_border: Color::Rgb(160, 140, 110),
    filled_cell_bg: Color::Rgb(60, 48, 36),
    filled_cell_fg: Color::Rgb(95, 78, 58),
    correct: Color::Rgb(134, 179, 94),
    incorrect: Color::Rgb(200, 90, 70),
    accent: Color::Rgb(214, 170, 110),
    word_bg: Color::Rgb(84, 70, 52),
};

/// Old paper, oxblood and brass.
pub const DARK_ACADEMIA: Theme = Theme {
    id: "dark-academia",
    name: "Dark Academia",
    primary: Color::Rgb(181, 148, 90),
    secondary: Color::Rgb(128, 30, 40),
    text: Color::Rgb(232, 220, 196),
    dimmed: Color::Rgb(130, 118, 100),
    success: Color::Rgb(140, 160, 90),
    error: Color::Rgb(190, 60, 60),
    grid_border: Color::Rgb(120, 100, 75),
    filled_cell_bg: Color::Rgb(28, 22, 18),
    filled_cell_fg: Color::Rgb(60, 48, 38),
    correct: Color::Rgb(140, 160, 90),
    incorrect: Color::Rgb(190, 60, 60),
    accent: Color::Rgb(181, 148, 90),
    word_bg: Color::Rgb(66, 52, 40),
};

/// Acid yellow against hot magenta.
pub const CYBERPUNK: Theme = Theme {
    id: "cyberpunk",
    name: "Cyberpunk",
    primary: Color::Rgb(252, 238, 10),
    secondary: Color::Rgb(255, 0, 85),
    text: Color::Rgb(230, 230, 230),
    dimmed: Color::Rgb(110, 110, 130),
    success: Color::Rgb(0, 255, 159),
    error: Color::Rgb(255, 0, 60),
    grid_border: Color::Rgb(0, 240, 255),
    filled_cell_bg: Color::Rgb(13, 2, 33),
    filled_cell_fg: Color::Rgb(45, 10, 70),
    correct: Color::Rgb(0, 255, 159),
    incorrect: Color::Rgb(255, 0, 60),
    accent: Color::Rgb(0, 240, 255),
    word_bg: Color::Rgb(60, 20, 90),
};

/// Sunflower gold over living green.
pub const SOLARPUNK: Theme = Theme {
    id: "solarpunk",
    name: "Solarpunk",
    primary: Color::Rgb(255, 196, 0),
    secondary: Color::Rgb(46, 160, 67),
    text: Color::Rgb(250, 250, 235),
    dimmed: Color::Rgb(120, 140, 110),
    success: Color::Rgb(76, 175, 80),
    error: Color::Rgb(229, 115, 115),
    grid_border: Color::Rgb(139, 195, 74),
    filled_cell_bg: Color::Rgb(18, 40, 24),
    filled_cell_fg: Color::Rgb(40, 80, 45),
    correct: Color::Rgb(76, 175, 80),
    incorrect: Color::Rgb(229, 115, 115),
    accent: Color::Rgb(255, 214, 79),
    word_bg: Color::Rgb(45, 75, 40),
};

/// Dusty lavender, low contrast.
pub const LO_FI: Theme = Theme {
    id: "lo-fi",
    name: "Lo-Fi Vibes",
    primary: Color::Rgb(199, 171, 224),
    secondary: Color::Rgb(240, 170, 140),
    text: Color::Rgb(226, 222, 235),
    dimmed: Color::Rgb(125, 118, 140),
    success: Color::Rgb(160, 210, 170),
    error: Color::Rgb(230, 130, 140),
    grid_border: Color::Rgb(140, 130, 160),
    filled_cell_bg: Color::Rgb(40, 36, 52),
    filled_cell_fg: Color::Rgb(70, 62, 90),
    correct: Color::Rgb(160, 210, 170),
    incorrect: Color::Rgb(230, 130, 140),
    accent: Color::Rgb(240, 170, 140),
    word_bg: Color::Rgb(62, 56, 80),
};

/// Clear daytime blues.
pub const SKY_BLUE: Theme = Theme {
    id: "sky-blue",
    name: "Sky Blue",
    primary: Color::Rgb(2, 136, 209),
    secondary: Color::Rgb(255, 160, 0),
    text: Color::Rgb(33, 45, 60),
    dimmed: Color::Rgb(100, 120, 140),
    success: Color::Rgb(56, 142, 60),
    error: Color::Rgb(211, 47, 47),
    grid_border: Color::Rgb(79, 195, 247),
    filled_cell_bg: Color::Rgb(179, 229, 252),
    filled_cell_fg: Color::Rgb(129, 212, 250),
    correct: Color::Rgb(56, 142, 60),
    incorrect: Color::Rgb(211, 47, 47),
    accent: Color::Rgb(255, 160, 0),
    word_bg: Color::Rgb(225, 245, 254),
};

/// Periwinkle petals and leaf green.
pub const HYDRANGEA: Theme = Theme {
    id: "hydrangea",
    name: "Hydrangea",
    primary: Color::Rgb(149, 125, 205),
    secondary: Color::Rgb(96, 165, 250),
    text: Color::Rgb(240, 236, 250),
    dimmed: Color::Rgb(130, 125, 160),
    success: Color::Rgb(110, 190, 120),
    error: Color::Rgb(225, 100, 130),
    grid_border: Color::Rgb(180, 160, 230),
    filled_cell_bg: Color::Rgb(30, 26, 48),
    filled_cell_fg: Color::Rgb(64, 56, 110),
    correct: Color::Rgb(110, 190, 120),
    incorrect: Color::Rgb(225, 100, 130),
    accent: Color::Rgb(96, 165, 250),
    word_bg: Color::Rgb(55, 48, 90),
};

/// Theme used when nothing else is configured.
pub const DEFAULT: Theme = CYBER_WAVE;

impl Theme {
    /// All available themes.
    pub const ALL: &'static [Theme] = &[
        CYBER_WAVE,
        VAPORWAVE,
        COTTAGECORE,
        DARK_ACADEMIA,
        CYBERPUNK,
        SOLARPUNK,
        LO_FI,
        SKY_BLUE,
        HYDRANGEA,
    ];

    /// Look up a theme by its ID.
    ///
    /// Returns the DEFAULT theme if the ID is not found.
    pub fn by_id(id: &str) -> &'static Theme {
        Theme::ALL
            .iter()
            .find(|t| t.id == id)
            .unwrap_or(&DEFAULT)
    }

    /// Position of the theme in [`Theme::ALL`].
    pub fn index_of(id: &str) -> usize {
        Theme::ALL.iter().position(|t| t.id == id).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id() {
        assert_eq!(Theme::by_id("solarpunk").name, "Solarpunk");
        assert_eq!(Theme::by_id("no-such-theme").id, DEFAULT.id);
        assert_eq!(Theme::index_of("hydrangea"), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_verdict_colors_differ() {
        for theme in Theme::ALL {
            assert_ne!(theme.correct, theme.incorrect, "{}", theme.id);
        }
    }
}
