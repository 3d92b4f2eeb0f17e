//! Topic-by-topic publishing pipeline.
//!
//! Each configured topic runs through enrich, generate, build and publish in
//! order. A failing topic is reported and skipped; it never stops the batch.

pub mod enricher;

pub use enricher::{DataEnricher, PlaceholderEnricher};

use autopost_core::{AppConfig, CoreError, ErrorReporter};
use linkedin_client::{Publisher, UgcPost};
use llm_interface::ContentGenerator;
use tracing::{debug, error, info, info_span, Instrument};

/// How a single topic ended.
#[derive(Debug)]
pub enum TopicOutcome {
    /// The platform accepted the post.
    Published,
    /// The platform answered but did not accept the post.
    Rejected,
    /// A step failed before the platform accepted anything.
    Errored(CoreError),
}

impl TopicOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, TopicOutcome::Published)
    }
}

pub struct Orchestrator<E, G, P> {
    config: AppConfig,
    enricher: E,
    generator: G,
    publisher: P,
    reporter: ErrorReporter,
}

impl<E, G, P> Orchestrator<E, G, P>
where
    E: DataEnricher,
    G: ContentGenerator,
    P: Publisher,
{
    pub fn new(
        config: AppConfig,
        enricher: E,
        generator: G,
        publisher: P,
        reporter: ErrorReporter,
    ) -> Self {
        Self {
            config,
            enricher,
            generator,
            publisher,
            reporter,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Processes every configured topic in order.
    pub async fn run(&self) {
        let topics = self.config.topics();
        info!("Processing {} topics", topics.len());

        for topic in topics {
            self.process_topic(topic)
                .instrument(info_span!("topic", topic = %topic))
                .await;
        }

        info!("Finished processing topics");
    }

    pub async fn process_topic(&self, topic: &str) -> TopicOutcome {
        let record = self.enricher.enrich(topic);
        debug!(
            "Enrichment for '{}': {} key points, {} statistics, {} trends",
            record.topic,
            record.key_points.len(),
            record.statistics.len(),
            record.trends.len()
        );

        let text = match self.generator.generate(topic).await {
            Ok(text) => text,
            Err(e) => return self.errored(topic, e),
        };

        let post = match UgcPost::build(&text, &self.config.linkedin.company_page_id, None) {
            Ok(post) => post,
            Err(e) => return self.errored(topic, e.into()),
        };

        match self
            .publisher
            .publish(&post, &self.config.linkedin.access_token)
            .await
        {
            Ok(true) => {
                info!("Successfully posted content about {}", topic);
                TopicOutcome::Published
            }
            Ok(false) => {
                error!("Failed to post content about {}", topic);
                TopicOutcome::Rejected
            }
            Err(e) => self.errored(topic, e),
        }
    }

    fn errored(&self, topic: &str, e: CoreError) -> TopicOutcome {
        error!("Error processing topic {}: {}", topic, e);
        self.reporter.report_error(&e);
        TopicOutcome::Errored(e)
    }
}
