//! Exit code definitions for the s3sh binary
//!
//! Interactive sessions always leave through `exit` with code 0; these codes
//! matter for one-shot (-c) invocations driven by scripts.

use s3sh_core::Error;

/// Exit codes for the s3sh application.
///
/// These codes follow a consistent convention to allow scripts and automation
/// to handle different error scenarios appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// User input error: invalid arguments, bad name, malformed config, etc.
    UsageError = 2,

    /// Retryable network error: timeout, connection reset, 503, etc.
    NetworkError = 3,

    /// Authentication or permission failure
    AuthError = 4,

    /// Resource not found: directory, object, or local source file
    NotFound = 5,

    /// Conflict or precondition failure: existing or non-empty directory
    Conflict = 6,

    /// Operation not available
    UnsupportedFeature = 7,

    /// Operation was interrupted (e.g., Ctrl+C)
    Interrupted = 130,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::GeneralError => "General error",
            Self::UsageError => "Invalid arguments or names",
            Self::NetworkError => "Network error (retryable)",
            Self::AuthError => "Authentication or permission failure",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Conflict or precondition failure",
            Self::UnsupportedFeature => "Operation not available",
            Self::Interrupted => "Operation interrupted",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::EmptyName
            | Error::InvalidName
            | Error::MissingParameters
            | Error::Config(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_)
            | Error::InvalidUrl(_) => Self::UsageError,
            Error::Network(_) => Self::NetworkError,
            Error::NotPermitted => Self::AuthError,
            Error::NotFound | Error::ObjectNotFound | Error::MissingSource => Self::NotFound,
            Error::AlreadyExists | Error::NotEmpty => Self::Conflict,
            Error::NotImplemented => Self::UnsupportedFeature,
            Error::Unknown | Error::Io(_) => Self::GeneralError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
