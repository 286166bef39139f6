//! The report: one pass over the target, in a fixed order.

use rand::Rng;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::client::EsClient;
use crate::error::Result;
use crate::inspector::DEFAULT_SAMPLE_SIZE;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconConfig {
    /// Leading indices (listing order) whose documents are sampled.
    pub top_indices: usize,
    pub docs_per_index: usize,
}

impl Default for ReconConfig {
    fn default() -> Self {
        ReconConfig { top_indices: 5, docs_per_index: DEFAULT_SAMPLE_SIZE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The index listing came back empty; nothing after it was rendered.
    NoIndices,
}

/// Unwrap a read result, or report it on `out` and fall back to `T::default()`.
pub fn or_default<T: Default, W: Write + ?Sized>(
    out: &mut W,
    operation: &str,
    result: Result<T>,
) -> io::Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(err) => {
            debug!(error = %err, operation, "substituting empty result");
            writeln!(out, "{}", render::diagnostic(operation, &err))?;
            Ok(T::default())
        }
    }
}

/// Run the full report against `client`, writing to `out`.
///
/// Order: health and stats, probe-index creation, index listing, then the
/// overview, index table and per-index samples. The listing comes after the
/// probe so a successfully created index shows up in it.
pub async fn run<R, W>(
    client: &EsClient,
    config: &ReconConfig,
    rng: &mut R,
    out: &mut W,
) -> io::Result<RunOutcome>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    info!(endpoint = %client.endpoint(), "starting report");
    writeln!(out, "{}", render::connecting(client.endpoint()))?;

    let health = or_default(out, "getting cluster health", client.cluster_health().await)?;
    let stats = or_default(out, "getting cluster stats", client.cluster_stats().await)?;

    let probe = client.create_probe_index(rng).await;
    info!(index = probe.index(), created = probe.created(), "probe index attempted");
    writeln!(out, "{}", render::probe_outcome(&probe))?;

    let indices = or_default(out, "listing indices", client.list_indices().await)?;
    if indices.is_empty() {
        writeln!(out, "{}", render::no_indices())?;
        info!("no indices listed, stopping early");
        return Ok(RunOutcome::NoIndices);
    }

    writeln!(out, "{}", render::cluster_overview(&health, &stats))?;
    writeln!(out, "{}", render::index_table(&indices))?;

    writeln!(out, "{}", render::sample_dump_header(config.top_indices))?;
    for idx in indices.iter().take(config.top_indices) {
        let name = idx.index.as_deref();
        writeln!(out, "{}", render::index_section(name))?;
        let Some(name) = name else { continue };
        let docs = or_default(
            out,
            &format!("dumping index '{}'", name),
            client.dump_index(name, config.docs_per_index).await,
        )?;
        for (i, doc) in docs.iter().enumerate() {
            writeln!(out, "{}", render::document(i + 1, doc))?;
        }
    }

    info!(indices = indices.len(), "report complete");
    Ok(RunOutcome::Completed)
}
