//! FRED API integration: one bounded observations read per series.

use async_trait::async_trait;
use chrono::{Months, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::data::summary::{Observation, SeriesSummary, summarize};
use crate::error::FetchError;

pub const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";
pub const OBS_LIMIT: usize = 24;
const LOOKBACK_MONTHS: u32 = 24;

/// Anything that can return the newest-first observations of a series.
///
/// [`FredClient`] is the HTTP implementation; tests substitute canned data.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn fetch_observations(
        &self,
        series_id: &str,
        observation_start: NaiveDate,
    ) -> Result<Vec<Observation>, FetchError>;
}

pub struct FredClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ObservationSource for FredClient {
    async fn fetch_observations(
        &self,
        series_id: &str,
        observation_start: NaiveDate,
    ) -> Result<Vec<Observation>, FetchError> {
        let start = observation_start.format("%Y-%m-%d").to_string();
        let limit = OBS_LIMIT.to_string();
        debug!(series_id, observation_start = %start, "requesting FRED observations");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("observation_start", start.as_str()),
                ("sort_order", "desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        let parsed: ObservationsResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(parsed.observations)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<Observation>,
}

/// Start of the observation window: same month/day two calendar years back.
///
/// Feb 29 maps to Feb 28 of the earlier year (clamped, unlike a naive
/// year rewrite which would roll over to Mar 1).
pub fn observation_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(LOOKBACK_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Fetch and summarize one series. Every failure is logged and becomes `None`.
pub async fn fetch_series_summary<S>(source: &S, series_id: &str, today: NaiveDate) -> Option<SeriesSummary>
where
    S: ObservationSource + ?Sized,
{
    let result = match source.fetch_observations(series_id, observation_start(today)).await {
        Ok(observations) => summarize(series_id, &observations),
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => Some(summary),
        Err(e) => {
            warn!(series_id, error = %e, "no data for FRED series");
            None
        }
    }
}
