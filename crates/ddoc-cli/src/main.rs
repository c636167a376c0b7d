//! # ddoc CLI Entry Point
//!
//! Exit status: 0 when the document decoded, 1 when it did not (the
//! result is still printed), 2 on usage or configuration errors such as an
//! unreadable `--cert` file (nothing is printed on stdout).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ddoc_cli::{run, Cli, EXIT_USAGE};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match run(&cli) {
        Ok((output, status)) => {
            println!("{output}");
            ExitCode::from(status)
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "cannot scan");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
