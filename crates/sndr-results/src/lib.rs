//! Run persistence for simulation time series.
//!
//! A run is a directory holding `manifest.json` (parameters + bookkeeping)
//! and `timeseries.csv` (one row per completed step). The core never reads
//! these back; they exist for plotting and post-processing.

pub mod store;
pub mod types;

use thiserror::Error;

pub use store::RunStore;
pub use types::{RunManifest, run_id_for};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
