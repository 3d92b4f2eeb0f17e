pub mod api;
pub mod post;

#[cfg(test)]
mod tests;

pub use api::{LinkedInClient, Publisher, LINKEDIN_API_BASE};
pub use post::{organization_urn, UgcPost};
