//! Write-access probe: try to create a throwaway index.
//!
//! The index is left on the target; nothing reads it back or deletes it.

use rand::Rng;
use reqwest::StatusCode;

use crate::client::EsClient;
use crate::error::ReconError;

pub const PROBE_PREFIX: &str = "synack-";
const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// `synack-` followed by six lowercase alphanumerics drawn from `rng`.
pub fn probe_index_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut name = String::with_capacity(PROBE_PREFIX.len() + SUFFIX_LEN);
    name.push_str(PROBE_PREFIX);
    for _ in 0..SUFFIX_LEN {
        let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
        name.push(SUFFIX_CHARSET[idx] as char);
    }
    name
}

#[derive(Debug)]
pub enum ProbeOutcome {
    Created { index: String },
    /// The server answered but refused, e.g. a read-only cluster.
    Rejected { index: String, status: StatusCode, body: String },
    Failed { index: String, error: ReconError },
}

impl ProbeOutcome {
    pub fn index(&self) -> &str {
        match self {
            ProbeOutcome::Created { index }
            | ProbeOutcome::Rejected { index, .. }
            | ProbeOutcome::Failed { index, .. } => index,
        }
    }

    pub fn created(&self) -> bool {
        matches!(self, ProbeOutcome::Created { .. })
    }
}

impl EsClient {
    /// PUT a freshly named probe index. Only 200 and 201 count as created.
    pub async fn create_probe_index<R: Rng + ?Sized>(&self, rng: &mut R) -> ProbeOutcome {
        let index = probe_index_name(rng);
        match self.put_empty(&format!("/{}", index)).await {
            Ok((status, _)) if status == StatusCode::OK || status == StatusCode::CREATED => {
                ProbeOutcome::Created { index }
            }
            Ok((status, body)) => ProbeOutcome::Rejected { index, status, body },
            Err(error) => ProbeOutcome::Failed { index, error },
        }
    }
}
