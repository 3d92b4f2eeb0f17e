use autopost_core::EnrichmentRecord;

/// Extension point for gathering background material on a topic.
pub trait DataEnricher {
    fn enrich(&self, topic: &str) -> EnrichmentRecord;
}

/// Enricher with no data sources; every record comes back empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderEnricher;

impl DataEnricher for PlaceholderEnricher {
    fn enrich(&self, topic: &str) -> EnrichmentRecord {
        EnrichmentRecord::empty(topic)
    }
}
