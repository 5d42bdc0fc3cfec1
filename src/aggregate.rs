//! Indicator aggregation: fan the catalog out over an [`ObservationSource`]
//! and keep whatever comes back.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;

use chrono::Utc;
use futures::FutureExt;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::catalog::SERIES;
use crate::data::fred::{FredClient, ObservationSource, fetch_series_summary};
use crate::data::summary::IndicatorSnapshot;
use crate::env::{API_KEY_VAR, Environment};

/// Fetch all catalog indicators from FRED.
///
/// Returns `None` when the API key is missing, when every series fails, or
/// when the fan-out itself faults. Individual series failures only drop that
/// key from the snapshot.
pub async fn fetch_indicators<E>(env: &E) -> Option<IndicatorSnapshot>
where
    E: Environment + ?Sized,
{
    fetch_indicators_with(env, |api_key| FredClient::new(api_key)).await
}

/// [`fetch_indicators`] with the source constructor supplied by the caller.
///
/// `connect` receives the API key and is only called once a key was found.
pub async fn fetch_indicators_with<E, S, F>(env: &E, connect: F) -> Option<IndicatorSnapshot>
where
    E: Environment + ?Sized,
    S: ObservationSource,
    F: FnOnce(String) -> S,
{
    let Some(api_key) = env.api_key() else {
        warn!("{API_KEY_VAR} is not set; skipping indicator fetch");
        return None;
    };

    let run = async move { collect(connect(api_key)).await };
    match AssertUnwindSafe(run).catch_unwind().await {
        Ok(snapshot) => snapshot,
        Err(panic) => {
            error!(error = %panic_message(panic.as_ref()), "indicator fetch aborted");
            None
        }
    }
}

async fn collect<S: ObservationSource>(source: S) -> Option<IndicatorSnapshot> {
    let today = Utc::now().date_naive();
    let source = &source;

    let fetches = SERIES.into_iter().map(move |entry| async move {
        let outcome = AssertUnwindSafe(fetch_series_summary(source, entry.series_id, today))
            .catch_unwind()
            .await;
        (entry, outcome)
    });

    // Settle everything before looking at results; completion order is irrelevant.
    let mut indicators = BTreeMap::new();
    for (entry, outcome) in join_all(fetches).await {
        match outcome {
            Ok(Some(summary)) => {
                indicators.insert(entry.key.to_string(), summary);
            }
            Ok(None) => {}
            Err(panic) => {
                warn!(
                    key = entry.key,
                    series_id = entry.series_id,
                    error = %panic_message(panic.as_ref()),
                    "series fetch faulted"
                );
            }
        }
    }

    let fetched = indicators.len();
    let snapshot = IndicatorSnapshot::new(indicators);
    match &snapshot {
        Some(_) => info!(fetched, total = SERIES.len(), "indicator snapshot built"),
        None => warn!("no indicators could be fetched"),
    }
    snapshot
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
