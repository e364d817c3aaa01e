pub mod scan;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nmapr")]
#[command(about = "A command-line front-end for nmap.", version)]
pub struct CommandLine {
    /// Target IP or hostname
    #[arg(long)]
    pub target: String,

    /// nmap options, whitespace separated (e.g. "-sS -p 1-100")
    #[arg(long)]
    pub options: Option<String>,

    /// Path to the JSON config file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Abort the scan after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the nmap command line without executing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
