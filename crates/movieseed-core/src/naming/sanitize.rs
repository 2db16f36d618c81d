//! Cross-platform filename sanitization for display titles.

/// Characters rejected by common filesystems (Windows being the strictest).
const ILLEGAL: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitizes a display title for use as a file or folder name.
///
/// - Removes `<`, `>`, `:`, `"`, `/`, `\`, `|`, `?` and `*`
/// - Trims trailing whitespace and dots
/// - Leaves everything else untouched, including non-ASCII text
///
/// Total: an input made only of removable characters yields an empty string.
/// Use [`super::folder_name`] when the result must be a usable path component.
pub fn sanitize_filename(title: &str) -> String {
    let kept: String = title.chars().filter(|c| !ILLEGAL.contains(c)).collect();
    let trimmed_len = kept
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .len();
    let mut out = kept;
    out.truncate(trimmed_len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_clean_titles_alone() {
        assert_eq!(
            sanitize_filename("The Dark Knight (2008)"),
            "The Dark Knight (2008)"
        );
    }

    #[test]
    fn removes_colon_and_keeps_unicode() {
        assert_eq!(
            sanitize_filename("Léon: The Professional (1994)"),
            "Léon The Professional (1994)"
        );
        assert_eq!(sanitize_filename("千と千尋の神隠し"), "千と千尋の神隠し");
    }

    #[test]
    fn removes_every_illegal_char() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
    }

    #[test]
    fn trims_trailing_dots_and_whitespace() {
        assert_eq!(sanitize_filename("Kill Bill: Vol. 1. . \t"), "Kill Bill Vol. 1");
        assert_eq!(sanitize_filename("What?."), "What");
    }

    #[test]
    fn keeps_leading_dots_and_spaces() {
        assert_eq!(sanitize_filename("  .hidden"), "  .hidden");
    }

    #[test]
    fn trailing_illegal_chars_expose_trailing_space() {
        // The space only becomes trailing after the `?` is removed.
        assert_eq!(sanitize_filename("Who Am I ?"), "Who Am I");
    }

    #[test]
    fn empty_results() {
        assert_eq!(sanitize_filename(""), "");
        assert_eq!(sanitize_filename("???"), "");
        assert_eq!(sanitize_filename(" . :"), "");
    }

    #[test]
    fn output_never_contains_illegal_or_trailing_junk() {
        let samples = [
            "Star Wars: Episode IV - A New Hope (1977)",
            "Dr. Strangelove or: How I Learned to Stop Worrying and Love the Bomb (1964)",
            "a/b\\c|d",
            "end with dots...",
            "end with stars ***",
            "mixed . ? . ",
            "\u{00a0}nbsp\u{00a0}",
        ];
        for s in samples {
            let out = sanitize_filename(s);
            assert!(!out.contains(&ILLEGAL[..]), "{out:?} still has illegal chars");
            if let Some(last) = out.chars().last() {
                assert!(last != '.' && !last.is_whitespace(), "{out:?} ends badly");
            }
        }
    }
}
