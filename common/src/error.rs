//! Failure modes of a scan invocation.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between spawning nmap and reading its
/// output. Success and failure never share a channel: callers branch on
/// the variant, not on string prefixes.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The nmap binary could not be found on the search path.
    #[error("nmap is not installed")]
    ToolMissing,

    /// Spawning failed for a reason other than a missing binary
    /// (permissions, resource limits, ...).
    #[error("failed to start nmap: {0}")]
    Spawn(#[source] io::Error),

    /// I/O failure while waiting on the child process.
    #[error("i/o error while running nmap: {0}")]
    Io(#[source] io::Error),

    /// nmap ran but exited with a non-zero status. `stderr` carries the
    /// tool's own error text verbatim.
    #[error("nmap failed: {stderr}")]
    ScanFailed { code: Option<i32>, stderr: String },

    /// The scan did not finish within the configured deadline.
    #[error("nmap did not finish within {0:?}")]
    TimedOut(Duration),
}
