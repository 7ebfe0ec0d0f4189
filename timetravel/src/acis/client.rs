//! Arrivals board HTTP client.

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{BusArrival, StopCode};

use super::error::FetchError;
use super::parse::parse_departures;

/// Client for the arrivals board.
///
/// Makes one plain GET per call: no retries, no caching, and reqwest's
/// default timeouts.
#[derive(Debug, Clone)]
pub struct AcisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AcisClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the raw board page for a stop.
    #[tracing::instrument(skip(self, stop), fields(stop = %stop), err)]
    pub async fn get_board_html(&self, stop: &StopCode) -> Result<String, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("stopRef", stop.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "board page received");

        Ok(body)
    }

    /// Fetch and parse the arrivals for a stop.
    pub async fn get_arrivals(&self, stop: &StopCode) -> Result<Vec<BusArrival>, FetchError> {
        let html = self.get_board_html(stop).await?;
        let arrivals = parse_departures(&html)?;

        info!(stop = %stop, count = arrivals.len(), "fetched arrivals");

        Ok(arrivals)
    }
}
