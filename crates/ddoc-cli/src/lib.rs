//! # ddoc-cli: 2D-Doc Scanner Command Line
//!
//! Argument parsing, keychain assembly and result shaping for the `ddoc`
//! binary. Decoding itself lives in `ddoc-document`.
//!
//! ## Crate Policy
//!
//! - Decode and signature failures are part of the printed result, never
//!   process errors.
//! - `anyhow` is confined to this crate.

pub mod args;
pub mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;

use ddoc_crypto::KeyChain;
use ddoc_document::Decoder;

pub use args::{Cli, OutputFormat};
pub use report::ScanReport;

/// Built-in chains from `chains`, plus every explicitly named certificate
/// file. Explicit files must load.
pub fn load_keychain(chains: &Path, certs: &[PathBuf]) -> anyhow::Result<KeyChain> {
    let mut keychain = KeyChain::builtin(chains);
    for path in certs {
        keychain
            .load_file(path)
            .with_context(|| format!("loading certificate {}", path.display()))?;
    }
    tracing::info!(certificates = keychain.len(), "keychain ready");
    Ok(keychain)
}

/// Exit status when the payload did not decode.
pub const EXIT_NOT_DECODED: u8 = 1;
/// Exit status for usage and configuration errors, shared with clap.
pub const EXIT_USAGE: u8 = 2;

/// Scan `cli.code` and render the result. Returns the rendered report with
/// its exit status: `0` decoded, [`EXIT_NOT_DECODED`] otherwise.
///
/// `Err` means nothing was scanned: the keychain could not be assembled
/// or the report could not be rendered. The binary exits with
/// [`EXIT_USAGE`] in that case.
pub fn run(cli: &Cli) -> anyhow::Result<(String, u8)> {
    let keychain = load_keychain(&cli.chains, &cli.certs)?;
    let decoder = Decoder::default();
    let report = ScanReport::scan(&cli.code, &decoder, &keychain);
    let status = if report.success { 0 } else { EXIT_NOT_DECODED };
    Ok((render(&report, cli.format, cli.compact)?, status))
}

/// Serialize a report in the requested format.
pub fn render(report: &ScanReport, format: OutputFormat, compact: bool) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json if compact => serde_json::to_string(report)?,
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_render_formats() {
        let report = ScanReport::scan("nonsense", &Decoder::default(), &KeyChain::new());
        let compact = render(&report, OutputFormat::Json, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"success\":false"));
        let yaml = render(&report, OutputFormat::Yaml, false).unwrap();
        assert!(yaml.contains("success: false"));
    }

    #[test]
    fn test_missing_explicit_cert_fails() {
        let err = load_keychain(Path::new("no-such-dir"), &[PathBuf::from("missing.der")])
            .unwrap_err();
        assert!(format!("{err:#}").contains("missing.der"));
    }

    #[test]
    fn test_run_reports_undecodable_payload() {
        let cli = Cli::try_parse_from(["ddoc", "--chains", "no-such-dir", "--compact", "nonsense"]).unwrap();
        let (out, status) = run(&cli).unwrap();
        assert_eq!(status, EXIT_NOT_DECODED);
        assert!(out.contains("\"success\":false"));
    }

    #[test]
    fn test_run_fails_before_scanning_on_bad_cert() {
        let cli = Cli::try_parse_from([
            "ddoc",
            "--chains",
            "no-such-dir",
            "--cert",
            "missing.der",
            "nonsense",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("missing.der"));
    }

    #[test]
    fn test_missing_chains_dir_is_not_fatal() {
        let keychain = load_keychain(Path::new("no-such-dir"), &[]).unwrap();
        assert!(keychain.is_empty());
    }
}
