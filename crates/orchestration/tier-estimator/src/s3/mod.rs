//! S3 bucket and object listing.
//!
//! This module provides the storage side of an estimation run:
//! - The [`ObjectStorage`] trait and its S3 implementation
//! - Paginated object listing as a stream of pages

mod list;
mod storage;

pub use list::list_object_pages;
pub use storage::{ObjectPage, ObjectStorage, S3Storage};
