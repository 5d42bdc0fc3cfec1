//! Upstream data: the FRED client and observation shaping.

pub mod fred;
pub mod summary;

pub use fred::{FredClient, ObservationSource, fetch_series_summary, observation_start};
pub use summary::{IndicatorSnapshot, Observation, SeriesSummary, summarize};
