//! AWS-backed implementation of the registry seam
//!
//! Wraps `aws_sdk_ecr::Client` and maps the SDK's ListImages/DescribeImages
//! responses into the crate's own identifier and record types. Push times are
//! rendered with the SDK's RFC 3339 formatting, which is fixed-width and
//! lexically monotonic so the ranker can compare them as strings.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ecr::primitives::DateTimeFormat;
use aws_sdk_ecr::types::{ImageIdentifier as EcrImageIdentifier, ListImagesFilter, TagStatus};
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_types::region::Region;

use crate::error::{Result, SearchError};
use crate::registry::{
    ImageIdentifier, ImagePage, ImageRecord, LIST_MAX_RESULTS, RegistryApi,
};

pub struct EcrClient {
    client: aws_sdk_ecr::Client,
}

impl EcrClient {
    /// Establish an ECR session in the given region using the default
    /// credential chain. The configured region is always honored.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: aws_sdk_ecr::Client::new(&config),
        }
    }
}

#[async_trait]
impl RegistryApi for EcrClient {
    async fn list_images(
        &self,
        repository: &str,
        next_token: Option<String>,
    ) -> Result<ImagePage> {
        let filter = ListImagesFilter::builder()
            .tag_status(TagStatus::Tagged)
            .build();

        let output = self
            .client
            .list_images()
            .repository_name(repository)
            .max_results(LIST_MAX_RESULTS)
            .filter(filter)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| {
                SearchError::registry(
                    "ListImages",
                    repository,
                    DisplayErrorContext(&e).to_string(),
                )
            })?;

        let ids = output
            .image_ids()
            .iter()
            .map(|id| ImageIdentifier {
                tag: id.image_tag().map(str::to_string),
                digest: id.image_digest().map(str::to_string),
            })
            .collect();

        Ok(ImagePage {
            ids,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn describe_images(
        &self,
        repository: &str,
        ids: &[ImageIdentifier],
    ) -> Result<Vec<ImageRecord>> {
        let image_ids: Vec<EcrImageIdentifier> = ids
            .iter()
            .map(|id| {
                let mut builder = EcrImageIdentifier::builder();
                if let Some(tag) = &id.tag {
                    builder = builder.image_tag(tag);
                }
                if let Some(digest) = &id.digest {
                    builder = builder.image_digest(digest);
                }
                builder.build()
            })
            .collect();

        let output = self
            .client
            .describe_images()
            .repository_name(repository)
            .set_image_ids(Some(image_ids))
            .send()
            .await
            .map_err(|e| {
                SearchError::registry(
                    "DescribeImages",
                    repository,
                    DisplayErrorContext(&e).to_string(),
                )
            })?;

        let details = output.image_details();
        let mut records = Vec::with_capacity(details.len());
        for detail in details {
            let pushed_at = detail
                .image_pushed_at()
                .map(|ts| {
                    ts.fmt(DateTimeFormat::DateTime)
                        .map_err(|e| SearchError::Timestamp(e.to_string()))
                })
                .transpose()?;

            records.push(ImageRecord {
                tags: detail.image_tags().to_vec(),
                pushed_at,
            });
        }

        Ok(records)
    }
}
