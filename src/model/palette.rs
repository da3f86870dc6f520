use ratatui::style::Color;

/// A color the game can ask about: display name plus the swatch color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEntry {
    pub name: &'static str,
    pub value: Color,
}

pub const PALETTE: [ColorEntry; 10] = [
    ColorEntry { name: "Red", value: Color::Rgb(0xFF, 0x00, 0x00) },
    ColorEntry { name: "Green", value: Color::Rgb(0x00, 0xFF, 0x00) },
    ColorEntry { name: "Blue", value: Color::Rgb(0x00, 0x00, 0xFF) },
    ColorEntry { name: "Yellow", value: Color::Rgb(0xFF, 0xFF, 0x00) },
    ColorEntry { name: "Cyan", value: Color::Rgb(0x00, 0xFF, 0xFF) },
    ColorEntry { name: "Magenta", value: Color::Rgb(0xFF, 0x00, 0xFF) },
    ColorEntry { name: "Orange", value: Color::Rgb(0xFF, 0xA5, 0x00) },
    ColorEntry { name: "Purple", value: Color::Rgb(0x80, 0x00, 0x80) },
    ColorEntry { name: "Pink", value: Color::Rgb(0xFF, 0xC0, 0xCB) },
    ColorEntry { name: "Brown", value: Color::Rgb(0xA5, 0x2A, 0x2A) },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_ten_entries() {
        assert_eq!(PALETTE.len(), 10);
    }

    #[test]
    fn test_palette_names_are_distinct() {
        let names: HashSet<&str> = PALETTE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), PALETTE.len());
    }

    #[test]
    fn test_palette_values_are_distinct() {
        let values: HashSet<String> = PALETTE.iter().map(|e| format!("{:?}", e.value)).collect();
        assert_eq!(values.len(), PALETTE.len());
    }

    #[test]
    fn test_palette_known_values() {
        let blue = PALETTE.iter().find(|e| e.name == "Blue").unwrap();
        assert_eq!(blue.value, Color::Rgb(0x00, 0x00, 0xFF));

        let brown = PALETTE.iter().find(|e| e.name == "Brown").unwrap();
        assert_eq!(brown.value, Color::Rgb(0xA5, 0x2A, 0x2A));
    }
}
