use ratatui::style::Color;
use ratatui::symbols::border;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Color for the snake head cell.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for the fruit.
    pub fruit: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    fruit: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_fg: Color::DarkGray,
    hud_accent: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    fruit: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_fg: Color::DarkGray,
    hud_accent: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    fruit: Color::Yellow,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_fg: Color::DarkGray,
    hud_accent: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Glyphs used to paint the board entities.
///
/// Two fixed sets exist: the Unicode default and an ASCII fallback for
/// terminals without reliable block/arrow glyph support.
#[derive(Debug)]
pub struct GlyphSet {
    pub head_up: &'static str,
    pub head_down: &'static str,
    pub head_left: &'static str,
    pub head_right: &'static str,
    pub body: &'static str,
    pub tail: &'static str,
    pub fruit: &'static str,
    pub border: border::Set,
}

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPHS_UNICODE: GlyphSet = GlyphSet {
    head_up: "▲",
    head_down: "▼",
    head_left: "◀",
    head_right: "▶",
    body: "█",
    tail: "▓",
    fruit: "●",
    border: BORDER_HALF_BLOCK,
};

pub const GLYPHS_ASCII: GlyphSet = GlyphSet {
    head_up: "^",
    head_down: "v",
    head_left: "<",
    head_right: ">",
    body: "O",
    tail: "o",
    fruit: "*",
    border: border::PLAIN,
};

#[cfg(test)]
mod tests {
    use super::{by_name, THEMES, THEME_OCEAN};

    #[test]
    fn theme_lookup_is_case_insensitive() {
        let theme = by_name("oCeAn").expect("ocean theme should exist");
        assert_eq!(theme.name, THEME_OCEAN.name);
    }

    #[test]
    fn unknown_theme_name_returns_none() {
        assert!(by_name("plasma").is_none());
    }

    #[test]
    fn theme_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
