//! Invocation of the external `nmap` binary.
//!
//! This module owns the whole lifecycle of one scan: building the argument
//! vector, spawning the child process, waiting for it (optionally bounded
//! by a deadline) and classifying the outcome. It never touches the
//! network itself; all scanning is delegated to nmap.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, error};

use nmapr_common::error::ScanError;

/// Name the external scanner is invoked by; resolved through `PATH`.
pub const NMAP_BIN: &str = "nmap";

/// Captured result of a successful scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// nmap's standard output, verbatim.
    pub stdout: String,
    /// Wall-clock time the child process took.
    pub elapsed: Duration,
}

/// Builds the argument vector: the option string split on whitespace, with
/// the target appended last.
///
/// The split is naive on purpose: there is no quoting or escaping, so a
/// single logical flag value cannot contain spaces.
pub fn build_args(options: &str, target: &str) -> Vec<String> {
    let mut args: Vec<String> = options.split_whitespace().map(str::to_owned).collect();
    args.push(target.to_owned());
    args
}

/// Renders the full command line as it would be executed, for dry runs.
pub fn render_command(options: &str, target: &str) -> String {
    let mut parts = vec![NMAP_BIN.to_owned()];
    parts.extend(build_args(options, target));
    parts.join(" ")
}

/// Runs nmap against `target` with the given option string.
///
/// Blocks (asynchronously) until the child exits or `deadline` elapses.
/// On a deadline the child is killed rather than left running.
pub async fn run_scan(
    target: &str,
    options: &str,
    deadline: Option<Duration>,
) -> Result<ScanReport, ScanError> {
    invoke(NMAP_BIN, options, target, deadline).await
}

async fn invoke(
    program: &str,
    options: &str,
    target: &str,
    deadline: Option<Duration>,
) -> Result<ScanReport, ScanError> {
    let args = build_args(options, target);
    debug!(%program, ?args, "spawning scan process");

    let started = Instant::now();

    // kill_on_drop: dropping the wait future on timeout must not leave a
    // scan running in the background.
    let child = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|err| {
            let err = match err.kind() {
                std::io::ErrorKind::NotFound => ScanError::ToolMissing,
                _ => ScanError::Spawn(err),
            };
            error!("{err}");
            err
        })?;

    let output = match deadline {
        Some(limit) => match timeout(limit, child.wait_with_output()).await {
            Ok(result) => result.map_err(ScanError::Io)?,
            Err(_) => {
                let err = ScanError::TimedOut(limit);
                error!("{err}");
                return Err(err);
            }
        },
        None => child.wait_with_output().await.map_err(ScanError::Io)?,
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        error!(code = ?output.status.code(), "nmap failed: {}", stderr.trim_end());
        return Err(ScanError::ScanFailed {
            code: output.status.code(),
            stderr,
        });
    }

    Ok(ScanReport {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        elapsed: started.elapsed(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
