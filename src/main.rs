use autopost_core::{resolve_config_path, AppConfig, CoreError, ErrorExt, ErrorReporter};
use content_pipeline::{Orchestrator, PlaceholderEnricher};
use linkedin_client::LinkedInClient;
use llm_interface::OllamaGenerator;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "autopost=info,content_pipeline=info,llm_interface=info,linkedin_client=info";

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting autopost");

    let config_path = resolve_config_path();
    let config = AppConfig::load(&config_path).map_err(|e| {
        e.log_error();
        tracing::error!("{}", e.user_friendly_message());
        CoreError::Config(e)
    })?;

    let generator = OllamaGenerator::from_config(&config.ollama)?;
    let publisher = LinkedInClient::from_config(&config.linkedin)?;

    let orchestrator = Orchestrator::new(
        config,
        PlaceholderEnricher,
        generator,
        publisher,
        ErrorReporter::new(),
    );
    orchestrator.run().await;

    Ok(())
}
