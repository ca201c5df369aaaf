// Emoji table used by the off-topic heuristic.
//
// Kept apart from the cascade so new glyphs can be added without touching
// rule logic. Bump EMOJI_TABLE_VERSION whenever an entry changes, since it
// shifts which short comments land in the off-topic bucket.

/// Revision of the emoji table below.
pub const EMOJI_TABLE_VERSION: &str = "2025.11";

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// One recognized emoji shape.
#[derive(Debug, Clone, Copy)]
pub enum EmojiEntry {
    /// Inclusive code-point range.
    Range(char, char),
    /// A single code point.
    Single(char),
    /// A base glyph that only counts when followed by VS16 (emoji presentation).
    WithVariation(char),
}

/// The maintained emoji set, checked in order.
pub static EMOJI_TABLE: &[EmojiEntry] = &[
    // Emoticons: 😀 .. 🙏
    EmojiEntry::Range('\u{1F600}', '\u{1F64F}'),
    // Miscellaneous symbols and pictographs: 🌀 .. 🗿
    EmojiEntry::Range('\u{1F300}', '\u{1F5FF}'),
    // ✨
    EmojiEntry::Single('\u{2728}'),
    // ❤️
    EmojiEntry::WithVariation('\u{2764}'),
    // ♥️
    EmojiEntry::WithVariation('\u{2665}'),
];

/// Count emoji occurrences in `text`, scanning left to right without overlap.
///
/// Runs on the original comment, not the normalized one.
pub fn count_emoji(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut count = 0;
    let mut i = 0;

    while i < chars.len() {
        let next = chars.get(i + 1).copied();
        match match_at(chars[i], next) {
            Some(width) => {
                count += 1;
                i += width;
            }
            None => i += 1,
        }
    }
    count
}

/// How many chars the emoji starting at `ch` spans, if any.
fn match_at(ch: char, next: Option<char>) -> Option<usize> {
    EMOJI_TABLE.iter().find_map(|entry| match *entry {
        EmojiEntry::Range(lo, hi) if (lo..=hi).contains(&ch) => Some(1),
        EmojiEntry::Single(c) if c == ch => Some(1),
        EmojiEntry::WithVariation(c) if c == ch && next == Some(VARIATION_SELECTOR_16) => {
            Some(2)
        }
        _ => None,
    })
}
