//! Text transforms applied to CMS strings before rendering.

use std::sync::LazyLock;

use regex::Regex;

/// Decorative glyphs editors put in front of bullet lines.
static BULLET_GLYPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:🔸|🔹|🔶|🔷|•|▪|▸|►|✓|✔|✅)\s*").expect("invalid bullet glyph regex")
});

/// Split a multi-line card description into bullet items.
///
/// Blank and whitespace-only lines are dropped; one leading decorative glyph
/// is stripped from each remaining line. Order is preserved.
///
/// ```
/// use lander_sections::bullet_lines;
///
/// assert_eq!(bullet_lines("🔸 A\n\n🔸 B\n  \nC"), vec!["A", "B", "C"]);
/// ```
pub fn bullet_lines(description: &str) -> Vec<&str> {
    description
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_glyph)
        .collect()
}

/// Remove a single leading decorative glyph and the whitespace after it.
pub fn strip_glyph(line: &str) -> &str {
    match BULLET_GLYPH.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_blank_lines_dropped_order_kept() {
        assert_eq!(bullet_lines("🔸 A\n\n🔸 B\n  \nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_glyph_stripped_once() {
        assert_eq!(bullet_lines("🔸🔸 double"), vec!["🔸 double"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(bullet_lines("• one\r\n• two\r\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_glyph_in_middle_untouched() {
        assert_eq!(strip_glyph("price 🔸 today"), "price 🔸 today");
    }

    #[test]
    fn test_only_blank_input() {
        assert!(bullet_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_glyph_only_line_yields_empty_item() {
        assert_eq!(bullet_lines("🔸\nnext"), vec!["", "next"]);
    }
}
