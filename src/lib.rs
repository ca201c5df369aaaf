// Kéfir Topics: rule-cascade topic classification for campaign comments
//
// This is the library root. The classifier is the only module that makes
// decisions; the rest is campaign data and reporting around it.

pub mod campaign;
pub mod classifier;
pub mod output;
pub mod tally;

pub use campaign::{CampaignMetadata, CampaignStore};
pub use classifier::{Topic, TopicClassifier};
pub use tally::TopicTally;
