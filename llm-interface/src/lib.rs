use autopost_core::{CoreError, LlmError, OllamaConfig, Persona};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

const PROVIDER: &str = "ollama";
const GENERATE_ENDPOINT: &str = "/api/generate";

pub trait ContentGenerator {
    async fn generate(&self, topic: &str) -> Result<String, CoreError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Writes the instruction sent to the model for one topic.
pub fn build_prompt(persona: &Persona, topic: &str) -> String {
    format!(
        "As a {}, create a LinkedIn post about {}.\nTone: {}\nStyle: {}",
        persona.name, topic, persona.tone, persona.style
    )
}

/// Text generation backed by a local Ollama server.
pub struct OllamaGenerator {
    client: Client,
    host: String,
    model: String,
    persona: Persona,
}

impl OllamaGenerator {
    pub fn new(host: impl AsRef<str>, model: String, persona: Persona) -> Result<Self, CoreError> {
        // Generation can take minutes on local hardware, so no timeout is set.
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            host: host.as_ref().trim_end_matches('/').to_string(),
            model,
            persona,
        })
    }

    pub fn from_config(config: &OllamaConfig) -> Result<Self, CoreError> {
        Self::new(
            config.host.as_str(),
            config.model.clone(),
            config.persona.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }
}

impl ContentGenerator for OllamaGenerator {
    async fn generate(&self, topic: &str) -> Result<String, CoreError> {
        let url = format!("{}{}", self.host, GENERATE_ENDPOINT);
        let prompt = build_prompt(&self.persona, topic);
        let body = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };

        info!("Generating content about '{}' with {}", topic, self.model);
        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if status != StatusCode::OK {
            error!("Generation request failed with status {}", status);
            return Err(LlmError::GenerationFailed {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let parsed: GenerateResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse generation response: {}", e);
            LlmError::InvalidResponseFormat {
                provider: PROVIDER.to_string(),
            }
        })?;

        debug!("Generated {} characters for '{}'", parsed.response.len(), topic);
        Ok(parsed.response)
    }
}
