//! Read-only cluster queries.

use serde_json::json;

use crate::client::EsClient;
use crate::error::Result;
use crate::models::{ClusterHealth, ClusterStats, DocumentSample, IndexDescriptor, SearchResponse};

pub const HEALTH_PATH: &str = "/_cluster/health";
pub const STATS_PATH: &str = "/_cluster/stats";
pub const CAT_INDICES_PATH: &str = "/_cat/indices?format=json&bytes=mb";

/// Documents sampled per index when no limit is given.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

impl EsClient {
    pub async fn cluster_health(&self) -> Result<ClusterHealth> {
        self.get_json(HEALTH_PATH).await
    }

    pub async fn cluster_stats(&self) -> Result<ClusterStats> {
        self.get_json(STATS_PATH).await
    }

    /// Indices in the order the server lists them.
    pub async fn list_indices(&self) -> Result<Vec<IndexDescriptor>> {
        self.get_json(CAT_INDICES_PATH).await
    }

    /// `match_all` search for up to `limit` hits of `index`.
    pub async fn dump_index(&self, index: &str, limit: usize) -> Result<Vec<DocumentSample>> {
        let body = json!({ "size": limit, "query": { "match_all": {} } });
        let resp: SearchResponse = self.post_json(&format!("/{}/_search", index), &body).await?;
        Ok(resp.into_samples(limit))
    }
}
