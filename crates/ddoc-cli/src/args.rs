//! # Command-Line Arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Decode a 2D-Doc barcode payload and check its signature.
///
/// Prints a structured result on stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "ddoc", version, about)]
pub struct Cli {
    /// Raw barcode text, as emitted by the scanner.
    pub code: String,

    /// Directory holding the built-in chains (FR00.der .. FR04.der).
    #[arg(long, default_value = "chains")]
    pub chains: PathBuf,

    /// Additional DER certificate file; may be repeated.
    #[arg(long = "cert", value_name = "FILE")]
    pub certs: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Serialization of the result document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON (pretty unless `--compact`).
    Json,
    /// YAML.
    Yaml,
}

impl Cli {
    /// Log filter directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
