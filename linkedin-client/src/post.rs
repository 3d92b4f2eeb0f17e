//! UGC post payloads.
//!
//! Mirrors the body accepted by `POST /v2/ugcPosts`. Only text shares are
//! built; image attachments are rejected.

use autopost_core::PublishError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ORGANIZATION_URN_PREFIX: &str = "urn:li:organization:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    pub author: String,
    pub lifecycle_state: LifecycleState,
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: ShareCommentary,
    pub share_media_category: ShareMediaCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: MemberNetworkVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberNetworkVisibility {
    Public,
}

impl UgcPost {
    /// Builds a public text share authored by the given organization.
    ///
    /// `text` must contain something other than whitespace. Passing an
    /// `image_path` fails with [`PublishError::ImageAttachmentUnsupported`].
    pub fn build(
        text: &str,
        organization_id: &str,
        image_path: Option<&Path>,
    ) -> Result<Self, PublishError> {
        if let Some(path) = image_path {
            return Err(PublishError::ImageAttachmentUnsupported {
                path: path.display().to_string(),
            });
        }
        if text.trim().is_empty() {
            return Err(PublishError::EmptyContent);
        }

        Ok(Self {
            author: organization_urn(organization_id),
            lifecycle_state: LifecycleState::Published,
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary {
                        text: text.to_string(),
                    },
                    share_media_category: ShareMediaCategory::None,
                },
            },
            visibility: Visibility {
                member_network_visibility: MemberNetworkVisibility::Public,
            },
        })
    }

    pub fn text(&self) -> &str {
        &self.specific_content.share_content.share_commentary.text
    }
}

pub fn organization_urn(organization_id: &str) -> String {
    format!("{}{}", ORGANIZATION_URN_PREFIX, organization_id)
}
