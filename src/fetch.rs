//! Data provider: fetches the per-language dataset files over HTTP.
//!
//! Both datasets are requested concurrently (both in flight before either
//! completes) and initialization waits for both. A failure in either fetch is
//! caught and logged, and leaves the data store empty — every renderer then
//! degrades to a no-op instead of the page failing hard. There is no retry.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::i18n::Language;
use crate::store::DataStore;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("request for {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("dataset at {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        source: serde_json::Error,
    },
}

/// Fetch and parse a single dataset.
pub async fn fetch_dataset(
    client: &reqwest::Client,
    url: &str,
) -> Result<Dataset, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    Dataset::from_json_str(&body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Fetch every enabled language's dataset concurrently.
///
/// Returns a fully populated store, or an empty one if anything failed.
pub async fn load_datasets(config: &Config) -> DataStore {
    let languages = Language::enabled();
    info!("Fetching {} datasets from {}", languages.len(), config.data_base_url);

    let client = match reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build HTTP client: {}", e);
            return DataStore::new();
        }
    };

    let urls: Vec<String> = languages
        .iter()
        .map(|lang| config.dataset_url(lang.code()))
        .collect();

    // All requests go out before any completes
    let results =
        futures::future::join_all(urls.iter().map(|url| fetch_dataset(&client, url))).await;

    let mut store = DataStore::new();
    let mut failures = 0;
    for (lang, result) in languages.iter().zip(results) {
        match result {
            Ok(dataset) => {
                info!("✓ {} dataset loaded", lang.code());
                store.insert(*lang, dataset);
            }
            Err(e) => {
                failures += 1;
                warn!("✗ {} dataset failed: {}", lang.code(), e);
            }
        }
    }

    if failures > 0 {
        warn!(
            "{} of {} dataset fetches failed; starting with an empty data store",
            failures,
            languages.len()
        );
        return DataStore::new();
    }

    info!("Loaded {} datasets", store.len());
    store
}
