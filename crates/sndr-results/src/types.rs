//! Result data types.

use serde::{Deserialize, Serialize};
use sndr_core::Params;

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub timestamp: String,
    /// Parameter set the run was produced with, echoed verbatim.
    pub params: Params,
    /// Completed outer steps.
    pub steps: usize,
}

/// Derive a stable run id from the parameter set and wall-clock time.
pub fn run_id_for(params: &Params) -> RunId {
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S");
    format!("run-{stamp}-{:016x}", params.value_hash())
}
