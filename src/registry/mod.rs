//! Registry module for ECR interactions
//!
//! Defines the two-operation seam the search pipeline depends on: listing the
//! image identifiers of a repository and batch-describing identifiers to
//! obtain tag names and push timestamps. The production implementation in
//! [`ecr`] talks to AWS; tests substitute their own implementations.

pub mod ecr;

use async_trait::async_trait;

use crate::error::Result;

pub use ecr::EcrClient;

/// Maximum identifiers one ListImages call may return.
pub const LIST_MAX_RESULTS: i32 = 1000;

/// Maximum identifiers one DescribeImages call accepts.
pub const DESCRIBE_BATCH_MAX: usize = 100;

/// Handle for one image as returned by the listing operation, referencing it
/// by tag and/or content digest. Pure-digest references carry no tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageIdentifier {
    pub tag: Option<String>,
    pub digest: Option<String>,
}

impl ImageIdentifier {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            digest: None,
        }
    }

    pub fn digest_only(digest: impl Into<String>) -> Self {
        Self {
            tag: None,
            digest: Some(digest.into()),
        }
    }
}

/// One described image: all tag names attached to its digest, plus the
/// rendered push timestamp. A single digest can carry several tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub tags: Vec<String>,
    pub pushed_at: Option<String>,
}

/// One page of a listing. `next_token` is present when the repository holds
/// more identifiers than fit in the page.
#[derive(Debug, Clone, Default)]
pub struct ImagePage {
    pub ids: Vec<ImageIdentifier>,
    pub next_token: Option<String>,
}

/// The registry operations the search pipeline consumes. Exactly two calls
/// exist; nothing else in the registry API is used.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// List one page of up to [`LIST_MAX_RESULTS`] identifiers for the
    /// repository, restricted server-side to tagged images.
    async fn list_images(
        &self,
        repository: &str,
        next_token: Option<String>,
    ) -> Result<ImagePage>;

    /// Describe a batch of identifiers in a single call, returning tag names
    /// and push timestamps per matched image.
    async fn describe_images(
        &self,
        repository: &str,
        ids: &[ImageIdentifier],
    ) -> Result<Vec<ImageRecord>>;
}
