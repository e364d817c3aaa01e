//! End-to-end checks of the resolution pipeline: config file in,
//! argument vector out.

use nmapr_common::config::Config;
use nmapr_common::error::ScanError;
use nmapr_core::scanner;

use nmapr_integration_tests::write_config;

#[test]
fn absent_config_and_options_yield_syn_scan() {
    let cfg = Config::load("/no/such/directory/config.json");
    let options = cfg.resolve_options(None);
    assert_eq!(options, "-sS");

    let args = scanner::build_args(&options, "192.0.2.1");
    assert_eq!(args, ["-sS", "192.0.2.1"]);
}

#[test]
fn explicit_options_pass_through_split() {
    let cfg = Config::default();
    let options = cfg.resolve_options(Some("-sS -p 1-100"));

    let args = scanner::build_args(&options, "example.com");
    assert_eq!(args, ["-sS", "-p", "1-100", "example.com"]);
}

#[test]
fn config_file_supplies_default_options() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, r#"{"default_options": "-sV"}"#);

    let cfg = Config::load(&path);
    let options = cfg.resolve_options(None);
    assert_eq!(options, "-sV");

    let args = scanner::build_args(&options, "10.0.0.1");
    assert_eq!(args, ["-sV", "10.0.0.1"]);
}

#[test]
fn command_line_options_beat_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, r#"{"default_options": "-sV"}"#);

    let cfg = Config::load(&path);
    assert_eq!(cfg.resolve_options(Some("-sT")), "-sT");
}

#[test]
fn missing_tool_message_is_stable() {
    // the user-facing line for an uninstalled scanner must not drift
    assert_eq!(ScanError::ToolMissing.to_string(), "nmap is not installed");
}

#[test]
fn dry_run_line_matches_argument_vector() {
    assert_eq!(
        scanner::render_command("-sS -p 1-100", "example.com"),
        "nmap -sS -p 1-100 example.com"
    );
}
