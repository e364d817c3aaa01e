use std::time::Duration;

use colored::*;
use tracing::info;

use crate::commands::CommandLine;
use crate::terminal::{logging, print, spinner};
use nmapr_common::config::Config;
use nmapr_core::scanner::{self, ScanReport};

pub async fn scan(args: &CommandLine) -> anyhow::Result<()> {
    let cfg = Config::load(&args.config);
    let options = cfg.resolve_options(args.options.as_deref());
    let deadline = resolve_deadline(args.timeout, cfg.timeout_secs);

    if args.dry_run {
        println!("{}", scanner::render_command(&options, &args.target));
        return Ok(());
    }

    info!("running nmap on {} with options: {}", args.target, options);

    let pb = spinner::start(format!("Scanning {} ...", args.target));
    let outcome = scanner::run_scan(&args.target, &options, deadline).await;
    pb.finish_and_clear();

    let report = outcome?;
    info!(target: logging::OUTPUT_TARGET, "nmap output:\n{}", report.stdout);
    scan_ends(&args.target, &report);
    Ok(())
}

/// The command-line deadline wins over the configured one.
fn resolve_deadline(cli_secs: Option<u64>, cfg_secs: Option<u64>) -> Option<Duration> {
    cli_secs.or(cfg_secs).map(Duration::from_secs)
}

fn scan_ends(target: &str, report: &ScanReport) {
    print::header("scan results");
    println!("{}", report.stdout.trim_end());
    print::fat_separator();

    let target = target.bold().green();
    let elapsed = format!("{:.2}s", report.elapsed.as_secs_f64()).bold().yellow();
    print::centerln(&format!("Scan of {target} complete in {elapsed}"));
}
