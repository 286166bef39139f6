//! Response records for the handful of endpoints the tool reads.
//!
//! Every field is optional; a missing field only costs a placeholder in
//! the report.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Green,
    Yellow,
    Red,
    Unknown,
}

impl HealthStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => HealthStatus::Green,
            "yellow" => HealthStatus::Yellow,
            "red" => HealthStatus::Red,
            _ => HealthStatus::Unknown,
        }
    }
}

/// `GET /_cluster/health`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterHealth {
    #[serde(default, deserialize_with = "lenient_string")]
    pub cluster_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number_of_nodes: Option<String>,
}

impl ClusterHealth {
    pub fn health_status(&self) -> HealthStatus {
        self.status.as_deref().map(HealthStatus::parse).unwrap_or(HealthStatus::Unknown)
    }
}

/// `GET /_cluster/stats`, only the `indices` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterStats {
    #[serde(default, deserialize_with = "lenient_block")]
    pub indices: Option<IndicesStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicesStats {
    #[serde(default, deserialize_with = "lenient_string")]
    pub count: Option<String>,
    #[serde(default, deserialize_with = "lenient_block")]
    pub docs: Option<DocsStats>,
    #[serde(default, deserialize_with = "lenient_block")]
    pub store: Option<StoreStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocsStats {
    #[serde(default, deserialize_with = "lenient_string")]
    pub count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreStats {
    #[serde(default, deserialize_with = "lenient_number")]
    pub size_in_bytes: Option<f64>,
}

impl ClusterStats {
    pub fn index_count(&self) -> Option<&str> {
        self.indices.as_ref()?.count.as_deref()
    }

    pub fn doc_count(&self) -> Option<&str> {
        self.indices.as_ref()?.docs.as_ref()?.count.as_deref()
    }

    /// Total store size in MiB; a missing size counts as zero.
    pub fn store_size_mib(&self) -> f64 {
        let bytes = self
            .indices
            .as_ref()
            .and_then(|i| i.store.as_ref())
            .and_then(|s| s.size_in_bytes)
            .unwrap_or(0.0);
        bytes / BYTES_PER_MIB
    }
}

/// One row of `GET /_cat/indices?format=json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub index: Option<String>,
    #[serde(default, rename = "docs.count", deserialize_with = "lenient_string")]
    pub docs_count: Option<String>,
    #[serde(default, rename = "store.size", deserialize_with = "lenient_string")]
    pub store_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub health: Option<String>,
}

// Scalars are shown as-is: strings verbatim, anything else in its JSON form.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

// Any JSON number, or a string holding one.
fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// A nested block of the wrong shape is dropped on its own, not with its parent.
fn lenient_block<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(d)?.and_then(|v| serde_json::from_value(v).ok()))
}

/// A single search hit, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DocumentSample(pub Value);

impl DocumentSample {
    /// The stored document, or the whole hit when `_source` is absent.
    pub fn payload(&self) -> &Value {
        self.0.get("_source").unwrap_or(&self.0)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    hits: Option<SearchHits>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<DocumentSample>,
}

impl SearchResponse {
    pub(crate) fn into_samples(self, limit: usize) -> Vec<DocumentSample> {
        let mut hits = self.hits.map(|h| h.hits).unwrap_or_default();
        hits.truncate(limit);
        hits
    }
}
