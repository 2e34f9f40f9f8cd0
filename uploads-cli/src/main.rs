//! CLI for presigning uploads and building the static gallery
//!
//! Only the requested URL goes to stdout; everything else (resolved keys,
//! logs, errors) goes to stderr so the output stays script-friendly.

use std::process::ExitCode;

use clap::Parser;
use media_store::StoreError;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Missing or invalid arguments exit with 1; --help and --version
            // are not errors
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(failure_code(&err))
        }
    }
}

/// Missing bucket configuration exits with 2, everything else with 1.
fn failure_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StoreError>() {
        Some(StoreError::Config(_)) => 2,
        _ => 1,
    }
}
