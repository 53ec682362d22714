//! Hard character-count truncation

/// Maximum characters of the title shown on any card.
pub const TITLE_MAX_CHARS: usize = 30;

/// Maximum characters of the ingress shown while the card is at rest.
pub const INGRESS_MAX_CHARS: usize = 120;

/// Cut `text` to at most `max_chars` characters.
///
/// Characters are Unicode scalar values. The cut is a plain hard cut (it may
/// fall mid-word and adds no ellipsis) and always lands on a char boundary.
/// Text that already fits is returned unchanged.
///
/// ```
/// use teaser_card::truncate;
///
/// assert_eq!(truncate("Card Title longer than 30 characters", 30), "Card Title longer than 30 char");
/// assert_eq!(truncate("short", 30), "short");
/// assert_eq!(truncate("anything", 0), "");
/// ```
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Number of characters in `text`, counted the same way as [`truncate`].
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 6] = [
        "",
        "a",
        "This is a long text that needs to be truncated.",
        "Ærlig talt, blåbærsyltetøy på brødskiva",
        "emoji 🦀🦀🦀 crab",
        "日本語のテキスト",
    ];

    #[test]
    fn test_truncated_length_never_exceeds_max() {
        for text in SAMPLES {
            for max in 0..60 {
                let cut = truncate(text, max);
                assert!(char_len(cut) <= max, "{text:?} cut to {max}: {cut:?}");
                assert!(text.starts_with(cut));
            }
        }
    }

    #[test]
    fn test_short_text_unchanged() {
        for text in SAMPLES {
            let len = char_len(text);
            assert_eq!(truncate(text, len), text);
            assert_eq!(truncate(text, len + 5), text);
        }
    }

    #[test]
    fn test_long_text_cut_to_exact_length() {
        let text = "This is a long text that needs to be truncated.";
        let cut = truncate(text, 30);
        assert_eq!(cut, "This is a long text that needs");
        assert_eq!(char_len(cut), 30);
    }

    #[test]
    fn test_zero_max_is_empty() {
        assert_eq!(truncate("anything", 0), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_multibyte_cut_on_char_boundary() {
        assert_eq!(truncate("🦀🦀🦀", 2), "🦀🦀");
        assert_eq!(truncate("blåbær", 3), "blå");
        assert_eq!(truncate("日本語のテキスト", 3), "日本語");
    }
}
