mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    // Guard must outlive the run so buffered log lines reach nmapr.log.
    let _log_guard = logging::init();

    scan::scan(&args).await
}
