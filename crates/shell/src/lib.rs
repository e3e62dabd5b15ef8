//! s3sh shell library
//!
//! This module exports the shell components for use in integration tests.

use clap::Parser;

use s3sh_core::ConfigManager;
use s3sh_s3::S3Client;

pub mod commands;
pub mod dispatch;
pub mod exit_code;
pub mod output;
pub mod repl;

#[cfg(test)]
pub mod mock_store;

use exit_code::ExitCode;
use output::{Formatter, OutputConfig};

/// s3sh - An interactive shell for S3-compatible object storage
///
/// Starts a command loop that maps directory-style verbs (createdir, upload,
/// download, delete, deletedir, find, listdir) onto bucket and object
/// operations. Use -c to run a single command line non-interactively.
#[derive(Parser, Debug)]
#[command(name = "s3sh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Disable progress spinners
    #[arg(long, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Run a single command line and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Endpoint URL (overrides the configured profile)
    #[arg(long, env = "S3SH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Region (overrides the configured profile)
    #[arg(long, env = "S3SH_REGION")]
    pub region: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long)]
    pub force_path_style: bool,
}

/// Run the shell and return an exit code
pub async fn run(cli: Cli) -> ExitCode {
    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(e) => {
            Formatter::default().error(&format!("Failed to load configuration: {e}"));
            return ExitCode::from(&e);
        }
    };

    let output = OutputConfig {
        json: cli.json || config.defaults.output == "json",
        no_color: cli.no_color || config.defaults.color == "never",
        no_progress: cli.no_progress || !config.defaults.progress,
        quiet: cli.quiet,
    };
    let formatter = Formatter::new(output.clone());

    let mut profile = config.profile;
    if let Some(endpoint) = cli.endpoint {
        profile.endpoint = Some(endpoint);
    }
    if let Some(region) = cli.region {
        profile.region = region;
    }
    if cli.force_path_style {
        profile.force_path_style = true;
    }

    // One client for the whole session; commands only ever read it
    let store = match S3Client::new(profile).await {
        Ok(client) => client,
        Err(e) => {
            formatter.error(&format!("Failed to create storage client: {e}"));
            return ExitCode::from(&e);
        }
    };

    match cli.command {
        Some(line) => repl::run_command(&store, &output, &line).await,
        None => match repl::run(&store, &output).await {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                formatter.error(&format!("{e:#}"));
                ExitCode::GeneralError
            }
        },
    }
}
