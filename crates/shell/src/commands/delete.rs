//! delete command - delete an object from a directory

use s3sh_core::{Error, ObjectStore, Result};

use super::Response;

/// Execute the delete command
pub async fn execute(store: &dyn ObjectStore, key: &str, directory: &str) -> Result<Response> {
    if !store.bucket_exists(directory).await? {
        return Err(Error::NotFound);
    }

    store.delete_object(directory, key).await?;

    Ok(Response::message(format!(
        "File {key} deleted from directory {directory}."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_store::MockStore;

    #[tokio::test]
    async fn test_missing_bucket() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(false));

        let err = execute(&store, "a.txt", "missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn test_deleted() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_delete_object()
            .withf(|bucket, key| bucket == "docs" && key == "a.txt")
            .times(1)
            .returning(|_, _| Ok(()));

        let resp = execute(&store, "a.txt", "docs").await.unwrap();
        assert_eq!(
            resp.message.as_deref(),
            Some("File a.txt deleted from directory docs.")
        );
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_delete_object()
            .returning(|_, _| Err(Error::NotPermitted));

        let err = execute(&store, "a.txt", "docs").await.unwrap_err();
        assert!(matches!(err, Error::NotPermitted));
    }
}
