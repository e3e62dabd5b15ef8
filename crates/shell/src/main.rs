//! s3sh - interactive shell for S3-compatible object storage
//!
//! Reads commands from the user and maps each verb onto a single
//! object-storage operation.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use s3sh::Cli;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = s3sh::run(cli).await;

    std::process::exit(exit_code.as_i32());
}
