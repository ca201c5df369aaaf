// Topic tally: how a batch of comments distributes across topics.
//
// Counts are kept per topic and iterated in cascade order, so reports list
// topics in the same priority the classifier uses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classifier::Topic;

/// Per-topic comment counts for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicTally {
    counts: BTreeMap<Topic, u64>,
    total: u64,
}

impl TopicTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from already-classified topics.
    pub fn from_topics<I: IntoIterator<Item = Topic>>(topics: I) -> Self {
        let mut tally = Self::new();
        for topic in topics {
            tally.record(topic);
        }
        tally
    }

    pub fn record(&mut self, topic: Topic) {
        *self.counts.entry(topic).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, topic: Topic) -> u64 {
        self.counts.get(&topic).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Fraction of the batch assigned to `topic` (0.0 for an empty tally).
    pub fn share(&self, topic: Topic) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(topic) as f64 / self.total as f64
        }
    }

    /// Every topic with its count, in cascade order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, u64)> + '_ {
        Topic::ALL.into_iter().map(|t| (t, self.count(t)))
    }
}
