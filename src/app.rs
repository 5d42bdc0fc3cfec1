//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module:
//! - parses CLI arguments
//! - installs logging
//! - fetches the indicator snapshot
//! - prints it as JSON on stdout

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::aggregate::fetch_indicators;
use crate::cli::Cli;
use crate::data::IndicatorSnapshot;
use crate::env::{API_KEY_VAR, Environment, ProcessEnv};
use crate::error::AppError;

/// Entry point for the `macro-pulse` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let env = ProcessEnv::load();
    if env.api_key().is_none() {
        return Err(AppError::config(format!(
            "Missing {API_KEY_VAR} in environment (.env)."
        )));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::internal(format!("Failed to start async runtime: {e}")))?;

    let snapshot = runtime
        .block_on(fetch_indicators(&env))
        .ok_or_else(|| AppError::no_data("No indicators could be fetched from FRED."))?;

    println!("{}", render_json(&snapshot, cli.pretty)?);
    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON document.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn render_json(snapshot: &IndicatorSnapshot, pretty: bool) -> Result<String, AppError> {
    let out = if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    };
    out.map_err(|e| AppError::internal(format!("Failed to serialize snapshot: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};

    use crate::data::{Observation, summarize};

    fn snapshot() -> IndicatorSnapshot {
        let mut map = BTreeMap::new();
        map.insert(
            "CPI".to_string(),
            summarize(
                "CPIAUCSL",
                &[
                    Observation::new("2024-02-01", "310.0"),
                    Observation::new("2024-01-01", "300.0"),
                ],
            )
            .unwrap(),
        );
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        IndicatorSnapshot::at(map, now).unwrap()
    }

    #[test]
    fn compact_json_shape() {
        let json = render_json(&snapshot(), false).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["timestamp"], "2024-03-15T00:00:00.000Z");
        let cpi = &value["indicators"]["CPI"];
        assert_eq!(cpi["seriesId"], "CPIAUCSL");
        assert_eq!(cpi["currentValue"], 310.0);
        assert_eq!(cpi["previousValue"], 300.0);
        assert_eq!(cpi["change"], 10.0);
        assert_eq!(cpi["date"], "2024-02-01");
        assert_eq!(cpi["unit"], "Index 1982-1984=100");
    }

    #[test]
    fn pretty_json_is_multiline() {
        let json = render_json(&snapshot(), true).unwrap();
        assert!(json.contains("\n  \"indicators\""));
    }
}
