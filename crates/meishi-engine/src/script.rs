//! Script detection for CJK vs. Latin content.
//!
//! Every downstream stage branches on these predicates, so they stay
//! pure and allocation-free.

/// Returns whether a character belongs to a CJK script.
///
/// Covers CJK Unified Ideographs, Extensions A and B, Hiragana,
/// Katakana, and Hangul syllables.
#[must_use]
pub fn is_cjk(c: char) -> bool {
    matches!(
        u32::from(c),
        0x4E00..=0x9FFF       // CJK Unified Ideographs
        | 0x3400..=0x4DBF     // Extension A
        | 0x2_0000..=0x2_A6DF // Extension B
        | 0x3040..=0x309F     // Hiragana
        | 0x30A0..=0x30FF     // Katakana
        | 0xAC00..=0xD7AF     // Hangul syllables
    )
}

/// Counts CJK characters in a line.
#[must_use]
pub fn cjk_count(line: &str) -> usize {
    line.chars().filter(|&c| is_cjk(c)).count()
}

/// Counts alphabetic characters in a line, CJK included.
#[must_use]
pub fn letter_count(line: &str) -> usize {
    line.chars().filter(|c| c.is_alphabetic()).count()
}

/// Returns whether a line is primarily CJK: more than half of its
/// alphabetic characters are CJK. Integer division means a tie favors
/// non-CJK.
#[must_use]
pub fn is_primarily_cjk(line: &str) -> bool {
    cjk_count(line) > letter_count(line) / 2
}
