//! Command-line argument parsing

use clap::Parser;

use crate::error::{Result, SearchError};

#[derive(Parser, Debug)]
#[command(name = "ecr-search")]
#[command(about = "Search an ECR repository for tags matching a pattern, newest first")]
#[command(version, author)]
pub struct Args {
    /// The image repository name to search
    #[arg(long = "image", default_value = "", help = "The image name to search for")]
    pub image: String,

    /// Regex used to filter tags
    #[arg(
        long = "regex",
        default_value = "^latest",
        help = "Regex used to filter tags"
    )]
    pub regex: String,

    /// AWS region for the ECR session
    #[arg(
        long = "region",
        default_value = "us-east-1",
        help = "The AWS region to use"
    )]
    pub region: String,

    /// Paginate past the single bounded listing call and chunk describe batches
    #[arg(
        long = "all",
        help = "Fetch every page of identifiers instead of one bounded call"
    )]
    pub all: bool,

    /// Output format for results
    #[arg(
        long = "output",
        short = 'o',
        default_value = "text",
        help = "Output format: text, json"
    )]
    pub output: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate arguments
    pub fn validate(&self) -> Result<()> {
        if self.image.is_empty() {
            return Err(SearchError::Config(
                "--image is required: name the repository to search".to_string(),
            ));
        }

        if self.region.is_empty() {
            return Err(SearchError::Config(
                "--region cannot be empty".to_string(),
            ));
        }

        match self.output.as_str() {
            "text" | "json" => {}
            other => {
                return Err(SearchError::Config(format!(
                    "unknown output format {other:?}: must be one of: text, json"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(image: &str, output: &str) -> Args {
        Args {
            image: image.to_string(),
            regex: "^latest".to_string(),
            region: "us-east-1".to_string(),
            all: false,
            output: output.to_string(),
        }
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let parsed = Args::try_parse_from(["ecr-search"]).unwrap();
        assert_eq!(parsed.image, "");
        assert_eq!(parsed.regex, "^latest");
        assert_eq!(parsed.region, "us-east-1");
        assert!(!parsed.all);
        assert_eq!(parsed.output, "text");
    }

    #[test]
    fn missing_image_is_a_config_error() {
        assert!(args("", "text").validate().is_err());
        assert!(args("app", "text").validate().is_ok());
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        assert!(args("app", "yaml").validate().is_err());
        assert!(args("app", "json").validate().is_ok());
    }
}
