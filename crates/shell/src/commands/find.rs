//! find command - substring search over directory or object names

use s3sh_core::{Error, ListOptions, ObjectStore, Result, MAX_LISTED_BUCKETS};

use super::Response;

/// Page size for object scans
const FIND_PAGE_SIZE: i32 = 1000;

/// Execute the find command
///
/// Without a directory, searches directory names account-wide. With one,
/// scans its object keys page by page. Matching is plain substring
/// containment.
pub async fn execute(
    store: &dyn ObjectStore,
    pattern: &str,
    directory: Option<&str>,
) -> Result<Response> {
    match directory {
        None => {
            let buckets = store.list_buckets(MAX_LISTED_BUCKETS).await?;
            Ok(Response::listing(
                buckets
                    .into_iter()
                    .filter(|bucket| bucket.key.contains(pattern))
                    .map(|bucket| bucket.key)
                    .collect(),
            ))
        }
        Some(name) => {
            if !store.bucket_exists(name).await? {
                return Err(Error::NotFound);
            }

            let mut matches = Vec::new();
            let mut continuation_token: Option<String> = None;

            loop {
                let options = ListOptions {
                    max_keys: Some(FIND_PAGE_SIZE),
                    continuation_token: continuation_token.clone(),
                };

                let page = store.list_objects(name, options).await?;
                matches.extend(
                    page.items
                        .into_iter()
                        .filter(|object| object.key.contains(pattern))
                        .map(|object| object.key),
                );

                if page.truncated && page.continuation_token.is_some() {
                    continuation_token = page.continuation_token;
                } else {
                    break;
                }
            }

            Ok(Response::listing(matches))
        }
    }
}
