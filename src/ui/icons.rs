//! Glyph table for nav items and notices
//!
//! Looked up by name on every render, so freshly inserted content is
//! always decorated. Unknown names fall back to a neutral dot.

pub fn glyph(name: &str) -> &'static str {
    match name {
        "layout-dashboard" => "▦",
        "receipt" => "❖",
        "calendar-off" => "▣",
        "megaphone" => "◉",
        "menu" => "≡",
        _ => "·",
    }
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(glyph("no-such-icon"), "·");
        assert_eq!(glyph("layout-dashboard"), "▦");
    }
}
