use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Straight and curly double quotes (U+0022, U+201C, U+201D)
    static ref QUOTE_RE: Regex = Regex::new("[\"\u{201C}\u{201D}]").unwrap();
}

/// Strip double quotes anywhere in the text, then trim surrounding whitespace.
///
/// Example: `  “Deprem” "uyarısı"  ` -> `Deprem uyarısı`
pub fn clean(text: &str) -> String {
    QUOTE_RE.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOTES: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

    #[test]
    fn test_clean_removes_all_quote_variants() {
        assert_eq!(clean("\"Merkez Bankası\""), "Merkez Bankası");
        assert_eq!(clean("\u{201C}Merkez Bankası\u{201D}"), "Merkez Bankası");
        assert_eq!(clean("a\"b\u{201C}c\u{201D}d"), "abcd");
    }

    #[test]
    fn test_clean_trims_after_removing_quotes() {
        // Whitespace that only becomes outer once quotes are gone is trimmed too
        assert_eq!(clean("  \" Ekonomi \"  "), "Ekonomi");
        assert_eq!(clean("\t\n\"\"\n"), "");
    }

    #[test]
    fn test_clean_keeps_single_quotes_and_inner_spacing() {
        assert_eq!(clean(" Türkiye'nin  gündemi "), "Türkiye'nin  gündemi");
    }

    #[test]
    fn test_clean_output_has_no_quotes_or_outer_whitespace() {
        let inputs = [
            "",
            "   ",
            "\"",
            "\u{201C}\u{201D}",
            "  \"x\"  ",
            "\u{201C} yağmur \u{201D} \"uyarısı\"",
            "\n\"başlık\"\t",
            "no quotes",
            "\"\"\"   a   \"\"\"",
        ];

        for input in inputs {
            let cleaned = clean(input);
            assert!(!cleaned.contains(QUOTES), "quotes left in {:?}", cleaned);
            assert_eq!(cleaned, cleaned.trim(), "outer whitespace in {:?}", cleaned);
        }
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "  \"Seçim\" sonuçları  ",
            "\u{201C}\u{201D}  ",
            " \" a \" b \" ",
            "plain",
        ];

        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once);
        }
    }
}
