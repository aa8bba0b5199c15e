//! The three-stage search pipeline
//!
//! Tag Filter → Detail Builder → Result Ranker. The filter lists the
//! repository's identifiers and keeps those whose tag matches the request
//! pattern; the detail builder batch-describes the survivors into
//! (tag, push-time) results; the ranker orders them newest first.

use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, SearchError};
use crate::registry::{DESCRIBE_BATCH_MAX, ImageIdentifier, RegistryApi};

/// Read-only search parameters, constructed once per invocation. The tag
/// pattern is compiled here so a malformed pattern surfaces immediately as a
/// configuration failure instead of silently matching nothing later.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub repository: String,
    pattern: Regex,
    /// Follow listing pagination and chunk describe batches. Off by default:
    /// the bounded single-call mode matches the historical behavior, silently
    /// truncating repositories larger than one listing page.
    pub paginate: bool,
}

impl SearchRequest {
    pub fn new(repository: impl Into<String>, pattern: &str, paginate: bool) -> Result<Self> {
        let repository = repository.into();
        if repository.is_empty() {
            return Err(SearchError::Config(
                "repository name cannot be empty".to_string(),
            ));
        }

        let pattern = Regex::new(pattern).map_err(|source| SearchError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            repository,
            pattern,
            paginate,
        })
    }

    pub fn matches(&self, tag: &str) -> bool {
        self.pattern.is_match(tag)
    }
}

/// Final search entity: one tag name paired with its rendered push time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub pushed_at: String,
}

pub struct TagSearch<'a> {
    client: &'a dyn RegistryApi,
    request: &'a SearchRequest,
}

impl<'a> TagSearch<'a> {
    pub fn new(client: &'a dyn RegistryApi, request: &'a SearchRequest) -> Self {
        Self { client, request }
    }

    /// Tag Filter: list the repository's identifiers and keep those whose tag
    /// matches the pattern. Order-preserving; identifiers without a tag name
    /// (pure digest references) are skipped.
    pub async fn matching_tags(&self) -> Result<Vec<ImageIdentifier>> {
        let mut ids = Vec::new();
        let mut next_token = None;

        loop {
            let page = self
                .client
                .list_images(&self.request.repository, next_token)
                .await?;
            ids.extend(page.ids);
            next_token = page.next_token;

            if !self.request.paginate || next_token.is_none() {
                break;
            }
        }

        let matched: Vec<ImageIdentifier> = ids
            .into_iter()
            .filter(|id| {
                id.tag
                    .as_deref()
                    .is_some_and(|tag| self.request.matches(tag))
            })
            .collect();

        info!(
            repository = %self.request.repository,
            matched = matched.len(),
            "filtered image identifiers"
        );

        Ok(matched)
    }

    /// Detail Builder: describe the matched identifiers and expand each
    /// described image into one result per attached tag name. An empty input
    /// yields an empty output without touching the registry.
    ///
    /// Bounded mode issues a single un-chunked describe call even though the
    /// service rejects batches above [`DESCRIBE_BATCH_MAX`]; paginated mode
    /// chunks at that limit.
    pub async fn build_details(&self, ids: &[ImageIdentifier]) -> Result<Vec<SearchResult>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        if self.request.paginate {
            for chunk in ids.chunks(DESCRIBE_BATCH_MAX) {
                self.describe_into(chunk, &mut results).await?;
            }
        } else {
            self.describe_into(ids, &mut results).await?;
        }

        info!(
            repository = %self.request.repository,
            results = results.len(),
            "built tag details"
        );

        Ok(results)
    }

    async fn describe_into(
        &self,
        ids: &[ImageIdentifier],
        results: &mut Vec<SearchResult>,
    ) -> Result<()> {
        let records = self
            .client
            .describe_images(&self.request.repository, ids)
            .await?;

        for record in records {
            // An image without a push time cannot be ranked.
            let Some(pushed_at) = record.pushed_at else {
                continue;
            };
            for tag in record.tags {
                results.push(SearchResult {
                    name: tag,
                    pushed_at: pushed_at.clone(),
                });
            }
        }

        Ok(())
    }

    /// Run the full pipeline: filter, describe, rank.
    pub async fn run(&self) -> Result<Vec<SearchResult>> {
        let ids = self.matching_tags().await?;
        let results = self.build_details(&ids).await?;
        Ok(rank(results))
    }
}

/// Result Ranker: newest first. The comparison is lexical over the rendered
/// timestamp, which orders chronologically because the rendering is
/// fixed-width RFC 3339. Ties keep no guaranteed relative order.
pub fn rank(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    results.sort_unstable_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn result(name: &str, pushed_at: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            pushed_at: pushed_at.to_string(),
        }
    }

    #[test]
    fn request_rejects_empty_repository() {
        let err = SearchRequest::new("", "^latest", false).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn request_rejects_malformed_pattern() {
        let err = SearchRequest::new("app", "^(latest", false).unwrap_err();
        match err {
            SearchError::Pattern { pattern, .. } => assert_eq!(pattern, "^(latest"),
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn request_matches_anchored_pattern() {
        let request = SearchRequest::new("app", "^latest", false).unwrap();
        assert!(request.matches("latest"));
        assert!(request.matches("latest-arm64"));
        assert!(!request.matches("not-latest"));
    }

    #[test]
    fn rank_orders_newest_first() {
        let ranked = rank(vec![
            result("v1", "2024-01-01T00:00:00Z"),
            result("v3", "2024-03-01T00:00:00Z"),
            result("v2", "2024-02-01T00:00:00Z"),
        ]);

        for pair in ranked.windows(2) {
            assert!(pair[0].pushed_at >= pair[1].pushed_at);
        }
        assert_eq!(ranked[0].name, "v3");
        assert_eq!(ranked[2].name, "v1");
    }

    #[test]
    fn rank_is_idempotent() {
        let once = rank(vec![
            result("b", "2024-02-01T00:00:00Z"),
            result("a", "2024-01-01T00:00:00Z"),
        ]);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn rank_of_empty_is_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
