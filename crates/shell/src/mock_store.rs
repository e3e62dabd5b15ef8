//! Shared ObjectStore mock for handler unit tests.

use async_trait::async_trait;

use s3sh_core::{ListOptions, ListResult, ObjectInfo, ObjectStore, Result};

mockall::mock! {
    pub Store {}

    #[async_trait]
    impl ObjectStore for Store {
        async fn bucket_exists(&self, bucket: &str) -> Result<bool>;
        async fn create_bucket(&self, bucket: &str) -> Result<()>;
        async fn delete_bucket(&self, bucket: &str) -> Result<()>;
        async fn list_buckets(&self, max: i32) -> Result<Vec<ObjectInfo>>;
        async fn list_objects(&self, bucket: &str, options: ListOptions) -> Result<ListResult>;
        async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            data: Vec<u8>,
            content_type: Option<String>,
        ) -> Result<()>;
        async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
    }
}
