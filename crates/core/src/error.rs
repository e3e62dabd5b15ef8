//! Error types for s3sh-core
//!
//! The user-facing variants form a closed catalog: every response string the
//! shell can print for a failed command lives in one `Display` implementation,
//! so an unmapped condition is a compile error rather than a runtime lookup.

use thiserror::Error;

/// Result type alias for s3sh-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3sh operations
#[derive(Error, Debug)]
pub enum Error {
    /// Directory (bucket) name was blank
    #[error("Directory name cannot be empty.")]
    EmptyName,

    /// Directory name violates bucket naming rules
    #[error("Directory name is invalid.")]
    InvalidName,

    /// Directory already exists
    #[error("Directory already exists.")]
    AlreadyExists,

    /// Directory does not exist
    #[error("Directory does not exist.")]
    NotFound,

    /// Directory still holds objects
    #[error("Directory is not empty.")]
    NotEmpty,

    /// Requested object is absent from the directory
    #[error("Destination File does not exist.")]
    ObjectNotFound,

    /// Local source file for an upload is missing
    #[error("Source file cannot be found.")]
    MissingSource,

    /// Command line carried fewer (or more) tokens than the verb accepts
    #[error("Incorrect number of parameters provided")]
    MissingParameters,

    /// Provider denied access to the resource
    #[error("Not authorized to access resource.")]
    NotPermitted,

    /// Operation is declared but not available
    #[error("Functionality not implemented yet!")]
    NotImplemented,

    /// Fail-safe catch-all for requests that cannot be classified
    #[error("Something was not correct with the request. Try again.")]
    Unknown,

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network error (retryable)
    #[error("Network error: {0}")]
    Network(String),
}
