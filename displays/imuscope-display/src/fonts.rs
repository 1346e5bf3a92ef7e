//! Compiled-in fonts
//!
//! All fonts come from the ISO 8859-1 set so the degree sign renders.

use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_6X10, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoFont;

/// Font used when a name is not in the table
pub const DEFAULT_FONT: &MonoFont<'static> = &FONT_10X20;

const FONTS: [(&str, &MonoFont<'static>); 3] = [
    ("10x20", &FONT_10X20),
    ("9x18b", &FONT_9X18_BOLD),
    ("6x10", &FONT_6X10),
];

/// Look up a font by name
pub fn find_font(name: &str) -> Option<&'static MonoFont<'static>> {
    FONTS
        .iter()
        .find(|(font_name, _)| *font_name == name)
        .map(|(_, font)| *font)
}

/// Look up a font by name, falling back to [`DEFAULT_FONT`]
pub fn load_font(name: &str) -> &'static MonoFont<'static> {
    find_font(name).unwrap_or(DEFAULT_FONT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_font() {
        let font = load_font("6x10");
        assert_eq!(font.character_size.width, 6);
        assert_eq!(font.character_size.height, 10);
    }

    #[test]
    fn test_unknown_font_falls_back() {
        assert!(find_font("NotoSansBold20").is_none());
        let font = load_font("NotoSansBold20");
        assert_eq!(font.character_size.width, 10);
        assert_eq!(font.character_size.height, 20);
    }
}
