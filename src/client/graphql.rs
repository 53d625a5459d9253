use crate::models::storage::{LegacySnapshot, StorageSnapshot};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const STORAGE_QUERY: &str =
    "query { storage { Staged Transferred Pending Free MountPoint } }";
pub const LEGACY_STORAGE_QUERY: &str =
    "query { legacyStorage { Capacity Used MountPoint } }";

// Bounded so a hung daemon can never wedge a poll loop
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal GraphQL-over-HTTP client for the daemon's query endpoint.
pub struct GraphqlClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct StorageData {
    storage: StorageSnapshot,
}

#[derive(Deserialize)]
struct LegacyData {
    #[serde(rename = "legacyStorage")]
    legacy_storage: LegacySnapshot,
}

impl GraphqlClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::build(endpoint, false)
    }

    /// A client whose requests bypass any response cache between here and
    /// the daemon (network-only fetch policy).
    pub fn new_uncached(endpoint: &str) -> Result<Self> {
        Self::build(endpoint, true)
    }

    fn build(endpoint: &str, no_cache: bool) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if no_cache {
            headers.insert(
                reqwest::header::CACHE_CONTROL,
                reqwest::header::HeaderValue::from_static("no-cache"),
            );
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;
        Ok(Self { http, endpoint: endpoint.to_string() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn storage(&self) -> Result<StorageSnapshot> {
        let data: StorageData = self.run(STORAGE_QUERY)?;
        Ok(data.storage)
    }

    pub fn legacy_storage(&self) -> Result<LegacySnapshot> {
        let data: LegacyData = self.run(LEGACY_STORAGE_QUERY)?;
        Ok(data.legacy_storage)
    }

    fn run<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        let resp = self
            .http
            .post(self.endpoint.as_str())
            .json(&serde_json::json!({ "query": query }))
            .send()
            .with_context(|| format!("POST {}", self.endpoint))?
            .error_for_status()?;
        let body = resp.text()?;
        decode(&body)
    }
}

/// Decode a GraphQL response envelope. A non-empty `errors` array wins over
/// any data; the first error's message is passed through opaquely.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).context("malformed GraphQL response")?;
    if let Some(err) = envelope.errors.first() {
        return Err(anyhow!("{}", err.message));
    }
    envelope.data.ok_or_else(|| anyhow!("GraphQL response had no data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_storage_envelope() {
        let body = r#"{
            "data": {
                "storage": {
                    "Staged": 800,
                    "Transferred": 400,
                    "Pending": 230,
                    "Free": 0,
                    "MountPoint": "/var/lib/deals"
                }
            }
        }"#;
        let data: StorageData = decode(body).unwrap();
        assert_eq!(data.storage.staged, 800);
        assert_eq!(data.storage.total(), 1430);
    }

    #[test]
    fn decodes_legacy_envelope() {
        let body = r#"{
            "data": {
                "legacyStorage": { "Capacity": 100, "Used": 40, "MountPoint": "/mnt/old" }
            }
        }"#;
        let data: LegacyData = decode(body).unwrap();
        assert_eq!(data.legacy_storage.capacity, 100);
        assert_eq!(data.legacy_storage.bars()[1].amount, 60);
    }

    #[test]
    fn graphql_errors_win_over_data() {
        let body = r#"{
            "data": null,
            "errors": [{ "message": "storage accounting unavailable" }]
        }"#;
        let err = decode::<StorageData>(body).unwrap_err();
        assert_eq!(err.to_string(), "storage accounting unavailable");
    }

    #[test]
    fn missing_data_is_an_error() {
        let err = decode::<StorageData>("{}").unwrap_err();
        assert!(err.to_string().contains("no data"));
    }

    #[test]
    fn counts_above_u64_survive_the_wire() {
        let body = r#"{
            "data": {
                "storage": {
                    "Staged": 340282366920938463463374607431768211455,
                    "Transferred": 0,
                    "Pending": 0,
                    "Free": 0,
                    "MountPoint": "/"
                }
            }
        }"#;
        let data: StorageData = decode(body).unwrap();
        assert_eq!(data.storage.staged, u128::MAX);
    }
}
