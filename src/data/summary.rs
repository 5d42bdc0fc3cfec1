//! Reshaping raw FRED observations into per-series summaries.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::unit_for;
use crate::error::FetchError;

/// FRED marks unavailable observations with a single dot.
pub const MISSING_SENTINEL: &str = ".";

/// One `(date, value)` row as FRED returns it.
///
/// Malformed rows decode with an empty date or no value rather than failing
/// the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "value_as_text")]
    pub value: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde::de::IgnoredAny),
}

fn value_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawValue::Text(s)) => Some(s),
        Some(RawValue::Number(n)) => Some(n.to_string()),
        Some(RawValue::Other(_)) | None => None,
    })
}

impl Observation {
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: Some(value.into()),
        }
    }
}

/// Latest reading of a series with the move since the prior reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub series_id: String,
    pub current_value: f64,
    pub date: String,
    pub previous_value: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub unit: String,
}

/// All indicators that could be fetched in one pass.
///
/// Only built through [`IndicatorSnapshot::new`], which refuses an empty map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSnapshot {
    indicators: BTreeMap<String, SeriesSummary>,
    timestamp: String,
}

impl IndicatorSnapshot {
    /// Stamp `indicators` with the current UTC time. `None` if the map is empty.
    pub fn new(indicators: BTreeMap<String, SeriesSummary>) -> Option<Self> {
        Self::at(indicators, Utc::now())
    }

    pub fn at(indicators: BTreeMap<String, SeriesSummary>, now: DateTime<Utc>) -> Option<Self> {
        if indicators.is_empty() {
            return None;
        }
        Some(Self {
            indicators,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    pub fn indicators(&self) -> &BTreeMap<String, SeriesSummary> {
        &self.indicators
    }

    pub fn get(&self, key: &str) -> Option<&SeriesSummary> {
        self.indicators.get(key)
    }

    /// ISO 8601 UTC, e.g. `2024-03-15T12:00:00.000Z`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Build a summary from observations sorted newest first.
pub fn summarize(series_id: &str, observations: &[Observation]) -> Result<SeriesSummary, FetchError> {
    let latest = observations.first().ok_or(FetchError::NoObservations)?;

    let current_value = match latest.value.as_deref().and_then(non_sentinel) {
        Some(raw) => parse_number(raw)?,
        None => return Err(FetchError::MissingValue),
    };

    // A bad previous reading only costs us the delta, not the series.
    let previous_value = observations
        .get(1)
        .and_then(|prev| prev.value.as_deref())
        .and_then(non_sentinel)
        .and_then(|raw| parse_number(raw).ok());

    let (change, change_percent) = match previous_value {
        Some(prev) if prev != 0.0 => {
            let change = current_value - prev;
            (Some(change), Some(change / prev * 100.0))
        }
        _ => (None, None),
    };

    Ok(SeriesSummary {
        series_id: series_id.to_string(),
        current_value,
        date: latest.date.clone(),
        previous_value,
        change,
        change_percent,
        unit: unit_for(series_id).to_string(),
    })
}

fn non_sentinel(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_number(raw: &str) -> Result<f64, FetchError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FetchError::InvalidValue(raw.to_string())),
    }
}
