//! Provider-state setup for consumer-driven contract tests.
//!
//! Before replaying an interaction, a consumer test asks the provider to put
//! itself into a named state (for example `"scenario exists"`). This crate
//! wraps that one call using [`reqwest`].

use serde::Serialize;

/// Provider base URL used when `PROVIDER_URL` is unset.
pub const DEFAULT_PROVIDER_URL: &str = "http://localhost:5000/api";

/// Consumer name sent when the caller does not supply one.
pub const DEFAULT_CONSUMER: &str = "integration-tests";

/// Environment variable overriding [`DEFAULT_PROVIDER_URL`].
pub const PROVIDER_URL_VAR: &str = "PROVIDER_URL";

/// Errors from a state-setup call.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The HTTP request itself failed (connection refused, bad body, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Provider rejected state ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct StateRequest<'a> {
    consumer: &'a str,
    state: &'a str,
}

/// HTTP client for a provider's `/contract/states` endpoint.
#[derive(Debug, Clone)]
pub struct StateSetup {
    client: reqwest::Client,
    provider_url: String,
}

impl StateSetup {
    /// * `provider_url` - API base, e.g. `http://localhost:5000/api`.
    pub fn new(provider_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            provider_url: provider_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `PROVIDER_URL`, falling back to [`DEFAULT_PROVIDER_URL`].
    pub fn from_env() -> Self {
        let url = std::env::var(PROVIDER_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());
        Self::new(url)
    }

    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// `POST {provider_url}/contract/states` with `{consumer, state}`.
    ///
    /// Returns the provider's decoded JSON response.
    pub async fn set_state(
        &self,
        state: &str,
        consumer: &str,
    ) -> Result<serde_json::Value, ContractError> {
        tracing::debug!(state, consumer, provider = %self.provider_url, "Setting provider state");

        let response = self
            .client
            .post(format!("{}/contract/states", self.provider_url))
            .json(&StateRequest { consumer, state })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContractError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Set `state` on the provider named by `PROVIDER_URL`.
///
/// `consumer` defaults to [`DEFAULT_CONSUMER`].
pub async fn state_setup(
    state: &str,
    consumer: Option<&str>,
) -> Result<serde_json::Value, ContractError> {
    StateSetup::from_env()
        .set_state(state, consumer.unwrap_or(DEFAULT_CONSUMER))
        .await
}
