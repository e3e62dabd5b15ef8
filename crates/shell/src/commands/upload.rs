//! upload command - transfer a local file into a directory

use std::path::Path;

use s3sh_core::{Error, ObjectStore, Result};

use crate::output::{OutputConfig, ProgressBar};

use super::Response;

/// Execute the upload command
///
/// The object key defaults to the source file's base name. The content type
/// is guessed from the source path.
pub async fn execute(
    store: &dyn ObjectStore,
    output: &OutputConfig,
    source: &str,
    directory: &str,
    key: Option<&str>,
) -> Result<Response> {
    if directory.is_empty() {
        return Err(Error::EmptyName);
    }

    let source_path = Path::new(source);
    if !source_path.is_file() {
        return Err(Error::MissingSource);
    }

    let key = match key {
        Some(key) => key.to_string(),
        None => source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or(Error::MissingSource)?,
    };

    if !store.bucket_exists(directory).await? {
        return Err(Error::NotFound);
    }

    let data = std::fs::read(source_path)?;
    let content_type = mime_guess::from_path(source_path)
        .first()
        .map(|m| m.essence_str().to_string());

    let spinner = ProgressBar::spinner(output, &format!("Uploading {source}..."));
    let result = store.put_object(directory, &key, data, content_type).await;
    spinner.finish_and_clear();
    result?;

    Ok(Response::message(format!(
        "File {source} uploaded to directory {directory}."
    )))
}
