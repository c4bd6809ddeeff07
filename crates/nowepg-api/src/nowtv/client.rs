//! `NowTvClient` - NowTV EPG feed client implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalNowTvApi;
use super::endpoints::{NOWTV_BASE_URL, feed_url};
use super::error::ScheduleError;
use super::json::parse_schedule_body;
use super::types::DaySchedule;

/// NowTV EPG feed client.
///
/// Issues one GET per (channel group, date) pair and parses the JSON body.
/// No retries and no timeout override beyond the transport defaults.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct NowTvClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL of the EPG host.
    base_url: Url,
}

/// Builder for `NowTvClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct NowTvClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl NowTvClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests, or a mirror host).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<NowTvClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(NOWTV_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(NowTvClient {
            http_client,
            base_url,
        })
    }
}

impl NowTvClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> NowTvClientBuilder {
        NowTvClientBuilder::new()
    }
}

impl LocalNowTvApi for NowTvClient {
    #[instrument(skip_all)]
    async fn fetch_day_schedule(
        &self,
        group: &str,
        date: NaiveDate,
    ) -> Result<DaySchedule, ScheduleError> {
        let url = feed_url(&self.base_url, group, date);
        tracing::info!(%url, "Fetching schedule JSON");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScheduleError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScheduleError::Transport {
                url: url.clone(),
                source: e,
            })?;
        tracing::debug!(%url, body_len = body.len(), "Response body received");

        tracing::debug!(group, %date, "Parsing schedule JSON");
        parse_schedule_body(&url, &body)
    }
}
