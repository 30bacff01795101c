//! HTTP client for the agent platform REST API.
//!
//! Wraps `reqwest` with platform-specific URL construction, API key handling,
//! and typed envelope deserialization. Every call is a single attempt: retry
//! policy, if any, belongs to the caller.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlatformError;

const API_KEY_HEADER: &str = "x-api-key";

/// Client for the agent platform.
///
/// Use [`PlatformClient::new`] with an explicit base URL (production or a
/// wiremock server), or [`PlatformClient::from_app_config`].
pub struct PlatformClient {
    pub(crate) client: Client,
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Url,
}

impl PlatformClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// `timeout_secs` of `None` leaves requests without an overall timeout, so
    /// long-running agent invocations are bounded only by the platform.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlatformError::InvalidBaseUrl`] if
    /// `base_url` cannot serve as a URL base.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, PlatformError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Normalise to exactly one trailing slash so path segments append
        // below any prefix in the base URL.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlatformError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlatformError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            base_url: parsed,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`PlatformClient::new`].
    pub fn from_app_config(config: &radar_core::AppConfig) -> Result<Self, PlatformError> {
        Self::new(
            &config.platform_url,
            config.api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Builds `{base}/api/{segments...}` with each segment percent-encoded.
    pub(crate) fn build_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET and decodes the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] on network failure or a non-2xx status,
    /// and [`PlatformError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, PlatformError> {
        tracing::debug!(%url, "platform GET");
        let request = self.with_auth(self.client.get(url.clone()));
        let body = request.send().await?.error_for_status()?.text().await?;
        Self::decode(&url, &body)
    }

    /// Sends a POST with an optional JSON body and returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] on network failure or a non-2xx status.
    pub(crate) async fn post_text<B: serde::Serialize + ?Sized>(
        &self,
        url: Url,
        body: Option<&B>,
    ) -> Result<String, PlatformError> {
        tracing::debug!(%url, "platform POST");
        let mut request = self.with_auth(self.client.post(url));
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?.error_for_status()?.text().await?)
    }

    pub(crate) fn decode<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, PlatformError> {
        serde_json::from_str(body).map_err(|e| PlatformError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
