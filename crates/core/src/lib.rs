//! s3sh-core: Core library for the s3sh object-storage shell
//!
//! This crate provides the core functionality for s3sh, including:
//! - Configuration management
//! - Bucket name validation
//! - The error catalog shared by all commands
//! - ObjectStore trait for storage operations
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod bucket;
pub mod config;
pub mod error;
pub mod traits;

pub use bucket::validate_bucket_name;
pub use config::{Config, ConfigManager, Defaults, Profile};
pub use error::{Error, Result};
pub use traits::{ListOptions, ListResult, ObjectInfo, ObjectStore, MAX_LISTED_BUCKETS};
