//! Paginated object listing.

use async_stream::try_stream;
use futures::Stream;
use tier_error::Result;

use super::{ObjectPage, ObjectStorage};

/// List every page of objects in a bucket.
///
/// Follows continuation tokens until the storage reports no further page;
/// the number of pages is unbounded.
///
/// # Example
///
/// ```ignore
/// use futures::{StreamExt, pin_mut};
///
/// let pages = list_object_pages(&storage, "my-bucket", "eu-west-1");
/// pin_mut!(pages);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("{} objects", page.objects.len());
/// }
/// ```
pub fn list_object_pages<'a, S>(
    storage: &'a S,
    bucket: &'a str,
    region: &'a str,
) -> impl Stream<Item = Result<ObjectPage>> + 'a
where
    S: ObjectStorage + ?Sized,
{
    try_stream! {
        let mut continuation_token: Option<String> = None;

        loop {
            let page = storage
                .list_objects_page(bucket, region, continuation_token.take())
                .await?;

            let next = page.next_continuation_token.clone();
            yield page;

            match next {
                Some(token) => continuation_token = Some(token),
                None => break,
            }
        }
    }
}
