//! Hook for fetching the experiment summary list.

use crate::utils;
use gloo_net::http::Request;
use shared::api::endpoints;
use shared::{ExperimentSummary, FetchError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Return value from the use_experiments hook.
pub struct UseExperiments {
    /// Current list of experiment summaries
    pub experiments: Vec<ExperimentSummary>,
    /// Whether the initial fetch is still in flight
    pub loading: bool,
    /// Set if the fetch failed; the page renders the message
    pub error: Option<FetchError>,
}

/// Single read against the insights API. Non-2xx responses fail uniformly;
/// there is no status-code-specific handling.
async fn fetch_experiments() -> Result<Vec<ExperimentSummary>, FetchError> {
    let url = utils::api_url(endpoints::EXPERIMENTS);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::new(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::new("Failed to fetch experiments"));
    }

    response
        .json::<Vec<ExperimentSummary>>()
        .await
        .map_err(|e| FetchError::new(e.to_string()))
}

/// Hook for fetching experiment summaries on mount.
///
/// Issues one request per page visit; no polling, retry, or pagination.
///
/// # Returns
/// * `UseExperiments` - The current experiments, loading state, and error slot
#[hook]
pub fn use_experiments() -> UseExperiments {
    let experiments = use_state(Vec::<ExperimentSummary>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<FetchError>);

    // Fetch on mount
    {
        let experiments = experiments.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_experiments().await {
                    Ok(list) => {
                        experiments.set(list);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch experiments: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    UseExperiments {
        experiments: (*experiments).clone(),
        loading: *loading,
        error: (*error).clone(),
    }
}
