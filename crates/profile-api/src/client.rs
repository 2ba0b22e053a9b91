//! HTTP client for fetching member records.

use crate::types::{MemberProfile, ProfileEnvelope};

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}")]
    Server { status: u16 },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// Client for the event-forms record endpoint.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    base_url: String,
    http: reqwest::Client,
}

impl ProfileClient {
    /// Creates a client against the given API host.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// The API host this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one member record by identifier.
    ///
    /// `Ok(None)` means the server answered but carried no record for this
    /// identifier. Non-2xx statuses and transport failures are errors; the
    /// caller decides how uniformly to treat them.
    pub async fn fetch_profile(
        &self,
        member_id: &str,
    ) -> Result<Option<MemberProfile>, ApiError> {
        let url = format!("{}/api/event-forms/{}", self.base_url, member_id);
        tracing::debug!("Fetching member record from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }

        let envelope: ProfileEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}
