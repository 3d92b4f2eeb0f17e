use serde::{Deserialize, Serialize};

/// Supplementary facts gathered for a topic before generation.
///
/// Nothing populates these fields yet, so every record is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub topic: String,
    pub key_points: Vec<String>,
    pub statistics: Vec<String>,
    pub trends: Vec<String>,
}

impl EnrichmentRecord {
    pub fn empty(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key_points.is_empty() && self.statistics.is_empty() && self.trends.is_empty()
    }
}
