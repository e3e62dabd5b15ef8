//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s3sh-core,
//! translating provider error codes into the core catalog.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use s3sh_core::{Error, ListOptions, ListResult, ObjectInfo, ObjectStore, Profile, Result};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    region: String,
}

impl S3Client {
    /// Create a new S3 client from a connection profile
    ///
    /// Static credentials from the profile take precedence; without them the
    /// SDK's own resolution chain (environment, shared config, IMDS) applies.
    pub async fn new(profile: Profile) -> Result<Self> {
        profile.validate()?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(profile.region.clone()));

        if let (Some(access_key), Some(secret_key)) = (&profile.access_key, &profile.secret_key) {
            let credentials = aws_credential_types::Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None, // session token
                None, // expiry
                "s3sh-static-credentials",
            );
            loader = loader.credentials_provider(credentials);
        }

        if let Some(endpoint) = &profile.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let config = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(profile.force_path_style)
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Ok(Self {
            inner: client,
            region: profile.region,
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// Map a provider error onto the core catalog
///
/// Known error codes become their catalog variants; anything unclassified is
/// logged and surfaced as a network error, never swallowed.
fn translate_error(err: impl std::fmt::Display) -> Error {
    let err_str = err.to_string();
    if err_str.contains("NoSuchKey") {
        Error::ObjectNotFound
    } else if err_str.contains("NoSuchBucket") {
        Error::NotFound
    } else if err_str.contains("BucketAlreadyExists") || err_str.contains("BucketAlreadyOwnedByYou")
    {
        Error::AlreadyExists
    } else if err_str.contains("BucketNotEmpty") {
        Error::NotEmpty
    } else if err_str.contains("AccessDenied") {
        Error::NotPermitted
    } else if err_str.contains("InvalidBucketName") {
        Error::InvalidName
    } else {
        tracing::warn!("unclassified provider error: {err_str}");
        Error::Network(err_str)
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.inner.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                let err_str = format!("{}", DisplayErrorContext(&e));
                if err_str.contains("NotFound")
                    || err_str.contains("NoSuchBucket")
                    || err_str.contains("status: 404")
                {
                    Ok(false)
                } else {
                    Err(translate_error(err_str))
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let mut request = self.inner.create_bucket().bucket(bucket);

        // Regions other than us-east-1 require an explicit location constraint
        if self.region != "us-east-1" {
            let constraint = BucketLocationConstraint::from(self.region.as_str());
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(constraint)
                    .build(),
            );
        }

        request
            .send()
            .await
            .map_err(|e| translate_error(DisplayErrorContext(&e)))?;

        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        self.inner
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                let err_str = format!("{}", DisplayErrorContext(&e));
                if err_str.contains("NotFound") {
                    Error::NotFound
                } else {
                    translate_error(err_str)
                }
            })?;

        Ok(())
    }

    async fn list_buckets(&self, max: i32) -> Result<Vec<ObjectInfo>> {
        let mut buckets = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let remaining = max - buckets.len() as i32;
            if remaining <= 0 {
                break;
            }

            let mut request = self.inner.list_buckets().max_buckets(remaining);
            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| translate_error(DisplayErrorContext(&e)))?;

            for b in response.buckets() {
                let mut info = ObjectInfo::bucket(b.name().unwrap_or_default());
                if let Some(creation_date) = b.creation_date() {
                    info.last_modified = jiff::Timestamp::from_second(creation_date.secs()).ok();
                }
                buckets.push(info);
            }

            match response.continuation_token() {
                Some(token) => continuation_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(buckets)
    }

    async fn list_objects(&self, bucket: &str, options: ListOptions) -> Result<ListResult> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        if let Some(max) = options.max_keys {
            request = request.max_keys(max);
        }

        if let Some(token) = &options.continuation_token {
            request = request.continuation_token(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| translate_error(DisplayErrorContext(&e)))?;

        let mut items = Vec::new();
        for object in response.contents() {
            let key = object.key().unwrap_or_default().to_string();
            let size = object.size().unwrap_or(0);
            let mut info = ObjectInfo::object(&key, size);

            if let Some(modified) = object.last_modified() {
                info.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
            }

            if let Some(etag) = object.e_tag() {
                info.etag = Some(etag.trim_matches('"').to_string());
            }

            items.push(info);
        }

        Ok(ListResult {
            items,
            truncated: response.is_truncated().unwrap_or(false),
            continuation_token: response.next_continuation_token().map(|s| s.to_string()),
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_str = format!("{}", DisplayErrorContext(&e));
                if err_str.contains("NotFound") {
                    Error::ObjectNotFound
                } else {
                    translate_error(err_str)
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Error::Network(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(data)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<()> {
        let body = ByteStream::from(data);

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        request
            .send()
            .await
            .map_err(|e| translate_error(DisplayErrorContext(&e)))?;

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_str = format!("{}", DisplayErrorContext(&e));
                if err_str.contains("NotFound") {
                    Error::ObjectNotFound
                } else {
                    translate_error(err_str)
                }
            })?;

        Ok(())
    }
}
