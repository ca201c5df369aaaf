// Topic cascade classifier: assigns each comment exactly one topic.
//
// normalize -> content rules (ranks 1-9, first match wins)
//           -> fallback heuristic (rank 10)
//           -> "Otros" (rank 11)

pub mod emoji;
pub mod fallback;
pub mod normalize;
pub mod rules;
pub mod topic;

use std::fmt::Display;

use anyhow::Result;
use tracing::debug;

use fallback::FallbackHeuristic;
use rules::Rule;
pub use topic::Topic;

/// Deterministic, stateless comment classifier.
///
/// The rule table is compiled once in `new()` and never changes afterwards,
/// so a single instance can be shared freely between threads.
pub struct TopicClassifier {
    rules: Vec<Rule>,
    fallback: FallbackHeuristic,
}

impl TopicClassifier {
    /// Compile the campaign's rule table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: rules::compile_content_rules()?,
            fallback: FallbackHeuristic::new()?,
        })
    }

    /// Classify a comment. Anything with a textual representation is
    /// accepted and coerced to text first. Never fails.
    pub fn classify<C: Display>(&self, comment: C) -> Topic {
        let original = comment.to_string();
        let normalized = normalize::normalize(&original);

        if let Some(topic) = self.match_rules(&normalized) {
            return topic;
        }

        if let Some(topic) = self.fallback.classify(&original, &normalized) {
            debug!(topic = %topic, "Fallback heuristic flagged comment as noise");
            return topic;
        }

        Topic::Other
    }

    /// Classify a batch of comments, preserving order.
    pub fn classify_all<C: Display>(&self, comments: &[C]) -> Vec<Topic> {
        comments.iter().map(|c| self.classify(c)).collect()
    }

    /// Run only the content rules against normalized text.
    ///
    /// Returns the topic of the first rule that matches, or `None` if the
    /// comment needs the fallback heuristic.
    pub fn match_rules(&self, normalized: &str) -> Option<Topic> {
        let rule = self.rules.iter().find(|r| r.matches(normalized))?;
        debug!(rank = rule.rank(), topic = %rule.topic(), "Content rule matched");
        Some(rule.topic())
    }

    /// The compiled content rules, in cascade order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
