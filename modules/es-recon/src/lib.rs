//! Elasticsearch reconnaissance: cluster health and stats, index listing,
//! a write-access probe, and document sampling, rendered for the console.

pub mod client;
pub mod error;
pub mod inspector;
pub mod models;
pub mod probe;
pub mod recon;
pub mod render;

pub use client::{EsClient, REQUEST_TIMEOUT};
pub use error::ReconError;
pub use models::{ClusterHealth, ClusterStats, DocumentSample, HealthStatus, IndexDescriptor};
pub use probe::{probe_index_name, ProbeOutcome};
pub use recon::{run, ReconConfig, RunOutcome};
