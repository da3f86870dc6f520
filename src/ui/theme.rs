use ratatui::style::Color;

/// Colors applied uniformly across the widgets of one theme.
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub start_bg: Color,
    pub start_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    ClassicRed,
    DarkMode,
    OceanBlue,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [
        ThemeKind::ClassicRed,
        ThemeKind::DarkMode,
        ThemeKind::OceanBlue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::ClassicRed => "Classic Red",
            ThemeKind::DarkMode => "Dark Mode",
            ThemeKind::OceanBlue => "Ocean Blue",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::ClassicRed => Theme {
                bg: Color::Rgb(0xFF, 0x00, 0x00),
                fg: Color::White,
                button_bg: Color::White,
                button_fg: Color::Black,
                start_bg: Color::Rgb(0x4C, 0xAF, 0x50),
                start_fg: Color::White,
            },
            ThemeKind::DarkMode => Theme {
                bg: Color::Rgb(0x2D, 0x2D, 0x2D),
                fg: Color::White,
                button_bg: Color::Rgb(0x4A, 0x4A, 0x4A),
                button_fg: Color::White,
                start_bg: Color::Rgb(0x5C, 0xB8, 0x5C),
                start_fg: Color::White,
            },
            ThemeKind::OceanBlue => Theme {
                bg: Color::Rgb(0x00, 0x69, 0x94),
                fg: Color::White,
                button_bg: Color::Rgb(0xAF, 0xEE, 0xEE),
                button_fg: Color::Black,
                start_bg: Color::Rgb(0x7F, 0xFF, 0xD4),
                start_fg: Color::Black,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_themes() {
        assert_eq!(ThemeKind::ALL.len(), 3);
    }

    #[test]
    fn test_default_is_classic_red() {
        assert_eq!(ThemeKind::default(), ThemeKind::ClassicRed);
    }

    #[test]
    fn test_from_name_resolves_every_theme() {
        for kind in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(ThemeKind::from_name("Hot Pink"), None);
        assert_eq!(ThemeKind::from_name(""), None);
        // Lookup is exact, not case-folded
        assert_eq!(ThemeKind::from_name("classic red"), None);
    }

    #[test]
    fn test_classic_red_colors() {
        let theme = ThemeKind::ClassicRed.theme();
        assert_eq!(theme.bg, Color::Rgb(0xFF, 0x00, 0x00));
        assert_eq!(theme.fg, Color::White);
        assert_eq!(theme.start_bg, Color::Rgb(0x4C, 0xAF, 0x50));
    }

    #[test]
    fn test_dark_mode_colors() {
        let theme = ThemeKind::DarkMode.theme();
        assert_eq!(theme.bg, Color::Rgb(0x2D, 0x2D, 0x2D));
        assert_eq!(theme.button_bg, Color::Rgb(0x4A, 0x4A, 0x4A));
        assert_eq!(theme.button_fg, Color::White);
    }

    #[test]
    fn test_ocean_blue_colors() {
        let theme = ThemeKind::OceanBlue.theme();
        assert_eq!(theme.bg, Color::Rgb(0x00, 0x69, 0x94));
        assert_eq!(theme.button_bg, Color::Rgb(0xAF, 0xEE, 0xEE));
        assert_eq!(theme.start_fg, Color::Black);
    }
}
