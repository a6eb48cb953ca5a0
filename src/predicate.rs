//! String predicates evaluated by the check.
//!
//! All comparisons are exact and case-sensitive. An empty affix is trivially
//! satisfied, the same as `str::starts_with("")`.

/// True if `s` holds at least one non-whitespace character.
pub fn is_non_blank(s: &str) -> bool {
    s.chars().any(|c| !is_whitespace(c))
}

/// Whitespace as counted by a blank check: Unicode space, line and paragraph
/// separators except the no-break spaces, plus the ASCII controls
/// `\t \n \x0B \x0C \r` and the information separators `\x1C..=\x1F`.
/// U+0085 (next line) is not whitespace here.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{1C}'..='\u{1F}' => true,
        _ => c.is_whitespace(),
    }
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

pub fn contains(s: &str, needle: &str) -> bool {
    s.contains(needle)
}
