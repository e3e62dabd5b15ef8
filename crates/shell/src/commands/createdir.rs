//! createdir command - create a directory (bucket)

use s3sh_core::{validate_bucket_name, Error, ObjectStore, Result};

use super::Response;

/// Execute the createdir command
///
/// The name is validated locally before any request; an existing directory
/// is reported as a conflict rather than silently succeeding.
pub async fn execute(store: &dyn ObjectStore, name: &str) -> Result<Response> {
    validate_bucket_name(name)?;

    if store.bucket_exists(name).await? {
        return Err(Error::AlreadyExists);
    }

    store.create_bucket(name).await?;

    Ok(Response::message(format!("Directory {name} created.")))
}
