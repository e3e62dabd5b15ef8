//! deletedir command - delete an empty directory (bucket)

use s3sh_core::{Error, ObjectStore, Result};

use super::Response;

/// Execute the deletedir command
///
/// The provider enforces that the directory is empty; that failure surfaces
/// as its own condition instead of a generic error.
pub async fn execute(store: &dyn ObjectStore, name: &str) -> Result<Response> {
    if !store.bucket_exists(name).await? {
        return Err(Error::NotFound);
    }

    store.delete_bucket(name).await?;

    Ok(Response::message(format!("Directory {name} deleted.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_store::MockStore;

    #[tokio::test]
    async fn test_not_found() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(false));

        let err = execute(&store, "missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn test_deleted() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_delete_bucket()
            .withf(|bucket| bucket == "test-bucket")
            .times(1)
            .returning(|_| Ok(()));

        let resp = execute(&store, "test-bucket").await.unwrap();
        assert_eq!(
            resp.message.as_deref(),
            Some("Directory test-bucket deleted.")
        );
    }

    #[tokio::test]
    async fn test_not_empty_surfaces() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_delete_bucket()
            .returning(|_| Err(Error::NotEmpty));

        let err = execute(&store, "full-bucket").await.unwrap_err();
        assert!(matches!(err, Error::NotEmpty));
    }
}
