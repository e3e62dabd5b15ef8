//! download command - transfer an object to a local file

use std::path::{Path, PathBuf};

use s3sh_core::{Error, ObjectStore, Result};

use crate::output::{OutputConfig, ProgressBar};

use super::Response;

/// Execute the download command
///
/// The local target defaults to the object key. An existing file at the
/// target path is renamed with a `.bak` suffix before the new content is
/// written, so its contents are never lost.
pub async fn execute(
    store: &dyn ObjectStore,
    output: &OutputConfig,
    key: &str,
    directory: &str,
    target: Option<&str>,
) -> Result<Response> {
    if !store.bucket_exists(directory).await? {
        return Err(Error::NotFound);
    }

    let target_path = resolve_target(key, target);

    let spinner = ProgressBar::spinner(output, &format!("Downloading {key}..."));
    let result = store.get_object(directory, key).await;
    spinner.finish_and_clear();
    let data = result?;

    if target_path.is_file() {
        std::fs::rename(&target_path, backup_path(&target_path))?;
    }

    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&target_path, &data)?;

    Ok(Response::message(format!(
        "File {key} downloaded from directory {directory}."
    )))
}

fn resolve_target(key: &str, target: Option<&str>) -> PathBuf {
    PathBuf::from(target.unwrap_or(key))
}

/// `file.txt` becomes `file.txt.bak`; the suffix is appended, not swapped in,
/// so distinct files cannot collide on the same backup name.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_store::MockStore;

    fn quiet_output() -> OutputConfig {
        OutputConfig {
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_target_defaults_to_key() {
        assert_eq!(resolve_target("a.txt", None), PathBuf::from("a.txt"));
        assert_eq!(
            resolve_target("a.txt", Some("local.txt")),
            PathBuf::from("local.txt")
        );
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/tmp/file.txt")),
            PathBuf::from("/tmp/file.txt.bak")
        );
        assert_eq!(
            backup_path(Path::new("noext")),
            PathBuf::from("noext.bak")
        );
    }

    #[tokio::test]
    async fn test_missing_bucket() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(false));

        let err = execute(&store, &quiet_output(), "a.txt", "missing", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn test_missing_object() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_get_object()
            .returning(|_, _| Err(Error::ObjectNotFound));

        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("a.txt");

        let err = execute(
            &store,
            &quiet_output(),
            "a.txt",
            "docs",
            Some(target.to_str().unwrap()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::ObjectNotFound));
    }

    #[tokio::test]
    async fn test_downloads_to_target() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_get_object()
            .withf(|bucket, key| bucket == "docs" && key == "a.txt")
            .returning(|_, _| Ok(b"remote content".to_vec()));

        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("a.txt");

        let resp = execute(
            &store,
            &quiet_output(),
            "a.txt",
            "docs",
            Some(target.to_str().unwrap()),
        )
        .await
        .unwrap();

        assert_eq!(
            resp.message.as_deref(),
            Some("File a.txt downloaded from directory docs.")
        );
        assert_eq!(std::fs::read(&target).unwrap(), b"remote content");
    }

    #[tokio::test]
    async fn test_existing_file_is_preserved_as_backup() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_get_object()
            .returning(|_, _| Ok(b"new".to_vec()));

        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("data.txt");
        std::fs::write(&target, b"old").unwrap();

        execute(
            &store,
            &quiet_output(),
            "data.txt",
            "docs",
            Some(target.to_str().unwrap()),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"new");
        let backup = temp_dir.path().join("data.txt.bak");
        assert_eq!(std::fs::read(&backup).unwrap(), b"old");
    }
}
