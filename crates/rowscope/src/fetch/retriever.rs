//! Dataset retriever: metadata resolution and paginated row fetching with
//! retry on transient failures.

use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;

use crate::error::{Result, RowscopeError};
use crate::item::DatasetItem;

use super::response::{DatasetInfo, RowsPage};
use super::transport::{HttpTransport, Sleeper, ThreadSleeper, Transport};

/// Default base URL of the dataset API.
pub const DEFAULT_API_BASE: &str = "https://datasets-server.huggingface.co";

/// Rows requested per page.
pub const ROWS_PER_PAGE: usize = 100;

/// Attempts allowed per page request, including the first.
const MAX_ATTEMPTS: u32 = 3;

/// Backoff base when the server rate-limits (scaled by attempt number).
const RATE_LIMIT_BACKOFF: Duration = Duration::from_millis(1000);

/// Backoff base after a network failure (scaled by attempt number).
const NETWORK_BACKOFF: Duration = Duration::from_millis(500);

/// Config and split resolved for one retrieval session. Immutable once
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalConfig {
    pub dataset: String,
    pub config: String,
    pub split: String,
}

/// Preference order for config names.
const CONFIG_PREFERENCE: [&str; 2] = ["default", "all"];

/// Preference order for split names.
const SPLIT_PREFERENCE: [&str; 3] = ["train", "test", "validation"];

/// Fetches dataset rows and metadata over HTTP.
///
/// Pages are requested sequentially in increasing offset order; rows within a
/// page keep server order. Transient failures (HTTP 429, network errors) are
/// retried with linear backoff, everything else surfaces immediately.
pub struct Retriever {
    base_url: String,
    page_size: usize,
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
}

impl Retriever {
    /// Create a retriever against the default dataset API.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_url: DEFAULT_API_BASE.to_string(),
            page_size: ROWS_PER_PAGE,
            transport: Arc::new(HttpTransport::new()?),
            sleeper: Arc::new(ThreadSleeper),
        })
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the transport (used by tests).
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Override the backoff sleeper (used by tests).
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Override the page size (used by tests).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        self.page_size = page_size;
        self
    }

    /// Fetch raw dataset metadata from the info endpoint.
    pub fn dataset_info(&self, dataset_id: &str) -> Result<DatasetInfo> {
        let url = format!(
            "{}/info?dataset={}",
            self.base_url,
            encode_query_value(dataset_id)
        );
        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(RowscopeError::Http {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Resolve the config and split to fetch for a dataset.
    ///
    /// Prefers the `default` config, then `all`, then the first listed, and
    /// within the chosen config the `train` split, then `test`, then
    /// `validation`, then the first listed. Metadata failures fall back to
    /// `default`/`train` so an unreachable info endpoint never blocks row
    /// retrieval.
    pub fn resolve_config(&self, dataset_id: &str) -> RetrievalConfig {
        let fallback = RetrievalConfig {
            dataset: dataset_id.to_string(),
            config: "default".to_string(),
            split: "train".to_string(),
        };

        let info = match self.dataset_info(dataset_id) {
            Ok(info) if !info.dataset_info.is_empty() => info,
            _ => return fallback,
        };

        let config_name = pick_preferred(&info.dataset_info, &CONFIG_PREFERENCE);
        let split = info
            .dataset_info
            .get(&config_name)
            .filter(|config| !config.splits.is_empty())
            .map(|config| pick_preferred(&config.splits, &SPLIT_PREFERENCE))
            .unwrap_or(fallback.split);

        RetrievalConfig {
            dataset: dataset_id.to_string(),
            config: config_name,
            split,
        }
    }

    /// Fetch a single representative row, or `None` when the dataset is
    /// empty or the request ultimately fails. Sampling is advisory, so
    /// failures are swallowed here rather than propagated.
    pub fn fetch_sample(&self, dataset_id: &str) -> Option<DatasetItem> {
        let retrieval = self.resolve_config(dataset_id);
        let page = self.fetch_page(&retrieval, 0).ok()?;
        page.rows.into_iter().next().map(|entry| entry.row)
    }

    /// Fetch every row of the resolved split, in server order.
    ///
    /// The total reported by the first page is authoritative: pages are
    /// requested at increasing offsets until exactly that many rows have
    /// accumulated. `on_progress(loaded, total)` fires after every page,
    /// including the first. Any page failure aborts the whole load; no
    /// partial result is returned.
    pub fn fetch_all(
        &self,
        dataset_id: &str,
        on_progress: impl FnMut(usize, usize),
    ) -> Result<Vec<DatasetItem>> {
        let retrieval = self.resolve_config(dataset_id);
        self.fetch_all_resolved(&retrieval, on_progress)
    }

    /// Same as [`fetch_all`](Self::fetch_all), for an already-resolved
    /// config and split.
    pub fn fetch_all_resolved(
        &self,
        retrieval: &RetrievalConfig,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<Vec<DatasetItem>> {
        let mut items: Vec<DatasetItem> = Vec::new();

        let first = self.fetch_page(retrieval, 0)?;
        let total = first.num_rows_total;
        items.extend(first.rows.into_iter().map(|entry| entry.row));
        on_progress(items.len(), total);

        while items.len() < total {
            let offset = items.len();
            let page = self.fetch_page(retrieval, offset)?;
            if page.rows.is_empty() {
                return Err(RowscopeError::ShortRead { offset, total });
            }
            items.extend(page.rows.into_iter().map(|entry| entry.row));
            on_progress(items.len(), total);
        }

        Ok(items)
    }

    /// Fetch one page of rows with the retry policy applied.
    ///
    /// Up to three attempts per page. HTTP 429 waits `1000ms x attempt` and
    /// retries; other HTTP failures surface immediately with status and body.
    /// Network errors wait `500ms x attempt` on non-final attempts and become
    /// a terminal retries-exhausted error once attempts run out.
    pub fn fetch_page(&self, retrieval: &RetrievalConfig, offset: usize) -> Result<RowsPage> {
        let url = self.rows_url(retrieval, offset);

        let mut attempt: u32 = 1;
        loop {
            match self.transport.get(&url) {
                Ok(response) if response.is_success() => {
                    return Ok(serde_json::from_str(&response.body)?);
                }
                Ok(response) if response.status == 429 && attempt < MAX_ATTEMPTS => {
                    self.sleeper.sleep(RATE_LIMIT_BACKOFF * attempt);
                }
                Ok(response) => {
                    return Err(RowscopeError::Http {
                        status: response.status,
                        body: response.body,
                    });
                }
                Err(_) if attempt < MAX_ATTEMPTS => {
                    self.sleeper.sleep(NETWORK_BACKOFF * attempt);
                }
                Err(error) => {
                    return Err(RowscopeError::RetriesExhausted {
                        attempts: MAX_ATTEMPTS,
                        message: error.to_string(),
                    });
                }
            }
            attempt += 1;
        }
    }

    /// Build the rows endpoint URL for one page.
    fn rows_url(&self, retrieval: &RetrievalConfig, offset: usize) -> String {
        format!(
            "{}/rows?dataset={}&config={}&split={}&offset={}&length={}",
            self.base_url,
            encode_query_value(&retrieval.dataset),
            encode_query_value(&retrieval.config),
            encode_query_value(&retrieval.split),
            offset,
            self.page_size
        )
    }
}

/// First name from `preferred` present in the map, else the first key.
fn pick_preferred<V>(map: &IndexMap<String, V>, preferred: &[&str]) -> String {
    for want in preferred {
        if map.contains_key(*want) {
            return (*want).to_string();
        }
    }
    map.keys().next().cloned().unwrap_or_default()
}

/// Percent-encode a query parameter value. Dataset ids contain `/`, which
/// must not be taken as path structure by the server.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_map(names: &[&str]) -> IndexMap<String, ()> {
        names.iter().map(|n| (n.to_string(), ())).collect()
    }

    #[test]
    fn test_pick_preferred_hits_first_preference() {
        let names = name_map(&["extra", "default"]);
        assert_eq!(pick_preferred(&names, &CONFIG_PREFERENCE), "default");
    }

    #[test]
    fn test_pick_preferred_falls_through_preference_order() {
        let names = name_map(&["all", "other"]);
        assert_eq!(pick_preferred(&names, &CONFIG_PREFERENCE), "all");
    }

    #[test]
    fn test_pick_preferred_defaults_to_first_listed() {
        let names = name_map(&["corpus", "extra"]);
        assert_eq!(pick_preferred(&names, &CONFIG_PREFERENCE), "corpus");
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("openai/gdpval"), "openai%2Fgdpval");
        assert_eq!(encode_query_value("plain-id_0.9~x"), "plain-id_0.9~x");
        assert_eq!(encode_query_value("a b"), "a%20b");
    }

    #[test]
    fn test_rows_url_shape() {
        let retriever = Retriever {
            base_url: "http://api.test".to_string(),
            page_size: 100,
            transport: Arc::new(super::super::mock::MockTransport::new()),
            sleeper: Arc::new(ThreadSleeper),
        };
        let retrieval = RetrievalConfig {
            dataset: "openai/gdpval".to_string(),
            config: "default".to_string(),
            split: "train".to_string(),
        };
        assert_eq!(
            retriever.rows_url(&retrieval, 200),
            "http://api.test/rows?dataset=openai%2Fgdpval&config=default&split=train&offset=200&length=100"
        );
    }
}
