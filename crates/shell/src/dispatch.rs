//! Line dispatcher
//!
//! Splits an input line on whitespace and parses the tokens with clap, so
//! arity and optional parameters are declared per verb instead of being
//! recovered by manual token indexing. Parse failures map onto the error
//! catalog; an unrecognized verb is an ordinary response, not an error.

use clap::error::ErrorKind;
use clap::Parser;

use s3sh_core::{Error, ObjectStore, Result};

use crate::commands::{self, Response};
use crate::output::OutputConfig;

/// Shell verbs and their parameters
#[derive(Debug, Parser)]
#[command(name = "s3sh", no_binary_name = true, disable_help_subcommand = true)]
pub enum Verb {
    /// Create a directory
    Createdir { name: String },

    /// Upload a local file into a directory
    Upload {
        source: String,
        directory: String,
        key: Option<String>,
    },

    /// Download an object to a local file
    Download {
        key: String,
        directory: String,
        target: Option<String>,
    },

    /// Delete an object from a directory
    Delete { key: String, directory: String },

    /// Delete an empty directory
    Deletedir { name: String },

    /// Find directories or objects whose name contains a pattern
    Find {
        pattern: String,
        directory: Option<String>,
    },

    /// List directories, or the contents of one
    Listdir { name: Option<String> },
}

/// Parse one input line and invoke the matching handler
pub async fn dispatch(
    store: &dyn ObjectStore,
    output: &OutputConfig,
    line: &str,
) -> Result<Response> {
    let verb = match Verb::try_parse_from(line.split_whitespace()) {
        Ok(verb) => verb,
        Err(e) => return parse_failure(e),
    };

    match verb {
        Verb::Createdir { name } => commands::createdir::execute(store, &name).await,
        Verb::Upload {
            source,
            directory,
            key,
        } => commands::upload::execute(store, output, &source, &directory, key.as_deref()).await,
        Verb::Download {
            key,
            directory,
            target,
        } => commands::download::execute(store, output, &key, &directory, target.as_deref()).await,
        Verb::Delete { key, directory } => commands::delete::execute(store, &key, &directory).await,
        Verb::Deletedir { name } => commands::deletedir::execute(store, &name).await,
        Verb::Find { pattern, directory } => {
            commands::find::execute(store, &pattern, directory.as_deref()).await
        }
        Verb::Listdir { name } => commands::listdir::execute(store, name.as_deref()).await,
    }
}

fn parse_failure(err: clap::Error) -> Result<Response> {
    match err.kind() {
        // Too few or too many tokens for the verb's arity
        ErrorKind::MissingRequiredArgument
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => Err(Error::MissingParameters),
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(Response::message("Command not recognized."))
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            Ok(Response::message(err.to_string()))
        }
        _ => Err(Error::Unknown),
    }
}
