//! Error types for avoda-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::WorkerName;

/// All errors that can arise from roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load — includes file path and position context from serde_json.
    #[error("failed to parse roster at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.avoda/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// Attempted to add a worker with an empty (or whitespace-only) name.
    #[error("worker name must not be empty")]
    EmptyName,

    /// Attempted to add a worker name that is already on the roster.
    #[error("worker '{name}' is already on the roster")]
    DuplicateName { name: WorkerName },

    /// Attempted to set a program for a name that is not on the roster.
    #[error("no worker named '{name}' on the roster")]
    UnknownWorker { name: WorkerName },
}
