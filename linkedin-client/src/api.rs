use crate::post::UgcPost;
use autopost_core::{CoreError, LinkedInConfig};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};
use url::Url;

pub const LINKEDIN_API_BASE: &str = "https://api.linkedin.com";
const UGC_POSTS_ENDPOINT: &str = "/v2/ugcPosts";
const USER_AGENT: &str = concat!("autopost/", env!("CARGO_PKG_VERSION"));

/// Submits finished posts to a publishing platform.
///
/// `Ok(false)` means the platform answered but did not accept the post.
/// Transport failures are returned as errors.
pub trait Publisher {
    async fn publish(&self, post: &UgcPost, access_token: &str) -> Result<bool, CoreError>;
}

#[derive(Debug)]
pub struct LinkedInClient {
    http_client: Client,
    api_base: String,
}

impl LinkedInClient {
    pub fn new() -> Result<Self, CoreError> {
        Self::with_api_base(LINKEDIN_API_BASE)
    }

    pub fn with_api_base(api_base: impl AsRef<str>) -> Result<Self, CoreError> {
        // No request timeout: a stalled endpoint blocks until the peer gives up.
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http_client,
            api_base: api_base.as_ref().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &LinkedInConfig) -> Result<Self, CoreError> {
        let api_base = config
            .api_base
            .as_ref()
            .map(Url::as_str)
            .unwrap_or(LINKEDIN_API_BASE);
        Self::with_api_base(api_base)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn ugc_posts_url(&self) -> String {
        format!("{}{}", self.api_base, UGC_POSTS_ENDPOINT)
    }
}

impl Publisher for LinkedInClient {
    async fn publish(&self, post: &UgcPost, access_token: &str) -> Result<bool, CoreError> {
        let url = self.ugc_posts_url();

        info!("Submitting post for {} to {}", post.author, UGC_POSTS_ENDPOINT);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(post)
            .send()
            .await
            .map_err(|e| {
                error!("Network error for POST {}: {}", UGC_POSTS_ENDPOINT, e);
                CoreError::Network(e)
            })?;

        let status = response.status();
        if status == StatusCode::CREATED {
            if let Some(post_id) = response
                .headers()
                .get("x-restli-id")
                .and_then(|v| v.to_str().ok())
            {
                debug!("Created post {}", post_id);
            }
            info!("Successfully posted to LinkedIn");
            return Ok(true);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Failed to post to LinkedIn ({}): {}", status, body);
        Ok(false)
    }
}
