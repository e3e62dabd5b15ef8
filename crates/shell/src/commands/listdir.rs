//! listdir command - list directories, or the contents of one

use s3sh_core::{Error, ListOptions, ObjectInfo, ObjectStore, Result, MAX_LISTED_BUCKETS};

use super::Response;

/// Page size for object listings
const LIST_PAGE_SIZE: i32 = 1000;

/// Execute the listdir command
///
/// Without a name, lists every directory for the account (bounded by
/// MAX_LISTED_BUCKETS). With a name, lists every object key in that
/// directory, walking all pages.
pub async fn execute(store: &dyn ObjectStore, name: Option<&str>) -> Result<Response> {
    match name {
        None => {
            let buckets = store.list_buckets(MAX_LISTED_BUCKETS).await?;
            Ok(Response::listing(
                buckets.iter().map(format_bucket).collect(),
            ))
        }
        Some(name) => {
            if !store.bucket_exists(name).await? {
                return Err(Error::NotFound);
            }

            let mut lines = Vec::new();
            let mut continuation_token: Option<String> = None;

            loop {
                let options = ListOptions {
                    max_keys: Some(LIST_PAGE_SIZE),
                    continuation_token: continuation_token.clone(),
                };

                let page = store.list_objects(name, options).await?;
                lines.extend(page.items.iter().map(format_object));

                if page.truncated && page.continuation_token.is_some() {
                    continuation_token = page.continuation_token;
                } else {
                    break;
                }
            }

            Ok(Response::listing(lines))
        }
    }
}

fn format_bucket(info: &ObjectInfo) -> String {
    format!("[{}] {}/", format_date(info), info.key)
}

fn format_object(info: &ObjectInfo) -> String {
    let size = info.size_human.clone().unwrap_or_default();
    format!("[{}] {:>9} {}", format_date(info), size, info.key)
}

fn format_date(info: &ObjectInfo) -> String {
    info.last_modified
        .map(|d| d.strftime("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| " ".repeat(19))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_store::MockStore;
    use s3sh_core::ListResult;

    #[tokio::test]
    async fn test_lists_all_buckets_without_name() {
        let mut store = MockStore::new();
        store
            .expect_list_buckets()
            .withf(|max| *max == MAX_LISTED_BUCKETS)
            .returning(|_| Ok(vec![ObjectInfo::bucket("alpha"), ObjectInfo::bucket("beta")]));

        let resp = execute(&store, None).await.unwrap();
        assert_eq!(resp.items.len(), 2);
        assert!(resp.items[0].ends_with("alpha/"));
        assert!(resp.items[1].ends_with("beta/"));
    }

    #[tokio::test]
    async fn test_missing_bucket() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(false));

        let err = execute(&store, Some("missing")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn test_lists_objects_across_pages() {
        let mut store = MockStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store
            .expect_list_objects()
            .withf(|bucket, options| bucket == "docs" && options.continuation_token.is_none())
            .returning(|_, _| {
                Ok(ListResult {
                    items: vec![ObjectInfo::object("a.txt", 10)],
                    truncated: true,
                    continuation_token: Some("next".into()),
                })
            });
        store
            .expect_list_objects()
            .withf(|bucket, options| {
                bucket == "docs" && options.continuation_token.as_deref() == Some("next")
            })
            .returning(|_, _| {
                Ok(ListResult {
                    items: vec![ObjectInfo::object("b.txt", 20)],
                    truncated: false,
                    continuation_token: None,
                })
            });

        let resp = execute(&store, Some("docs")).await.unwrap();
        assert_eq!(resp.items.len(), 2);
        assert!(resp.items[0].ends_with("a.txt"));
        assert!(resp.items[1].ends_with("b.txt"));
    }
}
