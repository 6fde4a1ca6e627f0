//! cd-license-check - License compliance checks backed by ClearlyDefined
//!
//! This library reviews third-party content (npm packages, Maven artifacts,
//! crates, ...) against a license policy, using the curated definitions
//! published by [ClearlyDefined](https://clearlydefined.io). It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_review`): Content records, ids and the approval policy
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cd_license_check::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let repository = CachingContentDataRepository::new(ClearlyDefinedRepository::new()?);
//! let use_case = CheckLicensesUseCase::new(
//!     FileSystemReader::new(),
//!     repository,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = CheckRequest::new(
//!     InputSource::from_arg("content-ids.txt"),
//!     vec![],
//!     ApprovalPolicy::default(),
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model = ReportReadModelBuilder::build(&response);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_review;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        CachingContentDataRepository, ClearlyDefinedRepository, ClientConfig,
    };
    pub use crate::application::dto::{CheckRequest, CheckResponse, OutputFormat};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::CheckLicensesUseCase;
    pub use crate::license_review::domain::{
        ContentId, ContentRecord, ReportMetadata, ReviewStatus, ReviewedContent,
    };
    pub use crate::license_review::policies::ApprovalPolicy;
    pub use crate::license_review::services::{ContentFilter, ReportGenerator};
    pub use crate::ports::outbound::{
        ContentDataRepository, ContentIdReader, InputSource, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
