//! ECR Tag Search Library
//!
//! This file serves as the library root for the ecr-search crate, organizing
//! and exposing the modules that make up the application.

pub mod cli;
pub mod error;
pub mod output;
pub mod registry;
pub mod search;

pub use error::{Result, SearchError};
pub use registry::{ImageIdentifier, ImagePage, ImageRecord, RegistryApi};
pub use search::{SearchRequest, SearchResult, TagSearch};
