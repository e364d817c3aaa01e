//! Runtime configuration, loaded once at startup from a JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::error;

/// Options handed to nmap when neither the command line nor the config
/// file supplies any.
pub const DEFAULT_OPTIONS: &str = "-sS";

/// Settings read from the JSON config file.
///
/// Unknown keys in the file are ignored. Every field has a built-in
/// default, so a partial file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// nmap options used when `--options` is absent.
    pub default_options: String,

    /// Upper bound on scan runtime, in seconds.
    ///
    /// Absent means the scan may run indefinitely, which matches nmap's
    /// own behavior on slow or heavily filtered targets.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_options: DEFAULT_OPTIONS.to_owned(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// A missing or malformed file is not fatal: the failure is logged and
    /// the built-in defaults are returned, so callers always get a usable
    /// `Config`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                error!("config loading failed ({}): {err}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                error!("config loading failed ({}): {err}", path.display());
                Self::default()
            }
        }
    }

    /// Picks the effective option string: the command-line value wins when
    /// present and non-blank, otherwise `default_options` applies.
    pub fn resolve_options(&self, cli_options: Option<&str>) -> String {
        match cli_options {
            Some(opts) if !opts.trim().is_empty() => opts.to_owned(),
            _ => self.default_options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn load_returns_file_value() {
        let file = write_config(r#"{"default_options": "-sV"}"#);
        let cfg = Config::load(file.path());
        assert_eq!(cfg.default_options, "-sV");
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn load_ignores_unknown_keys() {
        let file = write_config(r#"{"default_options": "-sT", "color": "never"}"#);
        let cfg = Config::load(file.path());
        assert_eq!(cfg.default_options, "-sT");
    }

    #[test]
    fn load_reads_timeout() {
        let file = write_config(r#"{"timeout_secs": 300}"#);
        let cfg = Config::load(file.path());
        assert_eq!(cfg.timeout_secs, Some(300));
        assert_eq!(cfg.default_options, DEFAULT_OPTIONS);
    }

    #[test]
    fn load_missing_file_falls_back() {
        let cfg = Config::load("/definitely/not/a/real/config.json");
        assert_eq!(cfg.default_options, DEFAULT_OPTIONS);
    }

    #[test]
    fn load_malformed_json_falls_back() {
        let file = write_config("not json at all {{{");
        let cfg = Config::load(file.path());
        assert_eq!(cfg.default_options, DEFAULT_OPTIONS);
    }

    #[test]
    fn resolve_prefers_cli_options() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_options(Some("-sS -p 1-100")), "-sS -p 1-100");
    }

    #[test]
    fn resolve_falls_back_to_config() {
        let cfg = Config {
            default_options: "-sV".to_owned(),
            timeout_secs: None,
        };
        assert_eq!(cfg.resolve_options(None), "-sV");
        assert_eq!(cfg.resolve_options(Some("")), "-sV");
        assert_eq!(cfg.resolve_options(Some("   ")), "-sV");
    }
}
