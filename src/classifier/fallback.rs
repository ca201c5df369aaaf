// Fallback heuristic, run only after every content rule has missed.
//
// Two structural checks decide whether a leftover comment is noise (rank 10,
// off-topic / emoji-only) or genuine content that simply fits no topic
// (rank 11, "Otros"). Neither check looks at what the comment is about.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::emoji::count_emoji;
use super::topic::Topic;

/// Tokens of this many chars or fewer ("de", "lo", "y") are not counted as words.
pub const SHORT_TOKEN_MAX_CHARS: usize = 2;

/// Comments with fewer substantive words than this are treated as noise.
pub const MIN_SUBSTANTIVE_WORDS: usize = 2;

/// Social acknowledgments and stickers, matched against the trimmed,
/// normalized comment. Most alternatives are anchored at both ends; laughter
/// and the leading glyphs only need to open the comment.
const BOILERPLATE_PATTERN: &str = r"^\s*\[sticker\]\s*$|^xd$|^jaja|^gracias$|^bendiciones$|^am[eé]n$|^si$|^no$|^❤|^♥|^✨";

pub struct FallbackHeuristic {
    boilerplate: Regex,
}

impl FallbackHeuristic {
    pub fn new() -> Result<Self> {
        let boilerplate =
            Regex::new(BOILERPLATE_PATTERN).context("Invalid boilerplate pattern")?;
        Ok(Self { boilerplate })
    }

    /// Returns `Some(Topic::OffTopic)` if the comment is noise, `None` if it
    /// should fall through to the catch-all.
    ///
    /// `original` is the comment as received (emoji are counted there);
    /// `normalized` is the lowercased form.
    pub fn classify(&self, original: &str, normalized: &str) -> Option<Topic> {
        if is_emoji_or_short(original, normalized) || self.is_boilerplate(normalized) {
            Some(Topic::OffTopic)
        } else {
            None
        }
    }

    /// Whole-comment acknowledgment check ("gracias", "jajaja", "[sticker]", ...).
    pub fn is_boilerplate(&self, normalized: &str) -> bool {
        self.boilerplate.is_match(normalized.trim())
    }
}

/// Emoji outnumber substantive words, or there are almost no words at all.
pub fn is_emoji_or_short(original: &str, normalized: &str) -> bool {
    let emoji = count_emoji(original);
    let words = count_substantive_words(normalized);
    emoji > words || words < MIN_SUBSTANTIVE_WORDS
}

/// Count whitespace-separated tokens longer than SHORT_TOKEN_MAX_CHARS.
pub fn count_substantive_words(normalized: &str) -> usize {
    normalized
        .split_whitespace()
        .filter(|w| w.chars().count() > SHORT_TOKEN_MAX_CHARS)
        .count()
}
