//! license-report - License report aggregation engine
//!
//! This library merges an organization's license policy feed with its
//! dependency inventory, license texts and copyright attributions into one
//! report keyed by atomic license id. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_report::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! let settings = resolve_settings(Path::new("."))?;
//! let generator = ReportGeneratorFactory::create(&settings, "my-api-token")?;
//!
//! let options = ReportOptions::builder()
//!     .include_copyright(settings.include_copyright)
//!     .projects(["a3f1c2d4-project"])
//!     .build()?;
//! let report = generator.generate("my-org-id", &options).await?;
//!
//! for (license_id, entry) in report.iter() {
//!     println!("{}: {} dependencies", license_id, entry.dependencies().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemLicenseTextReader;
    pub use crate::adapters::outbound::network::{
        CachingLicenseTextRepository, ClearlyDefinedClient, SnykOrgClient, SpdxLicenseTextClient,
    };
    pub use crate::application::dto::{ReportOptions, ReportOptionsBuilder};
    pub use crate::application::factories::{DefaultReportGenerator, ReportGeneratorFactory};
    pub use crate::application::use_cases::GenerateLicenseReportUseCase;
    pub use crate::config::{discover_config, load_config_from_path, resolve_settings, ReportSettings};
    pub use crate::license_report::domain::{
        DependencyFeed, DependencyMetadata, DependencyStub, EnrichedDependency, LicenseFeed,
        LicenseRecord, LicenseReportData, LicenseSeverity, LicenseText, PackageCoordinates,
        ReportEntry, ReportFilters,
    };
    pub use crate::ports::inbound::LicenseReportPort;
    pub use crate::ports::outbound::{
        CopyrightRepository, LicenseTextRepository, OrgDataRepository, ProgressReporter,
    };
    pub use crate::shared::error::ReportError;
    pub use crate::shared::Result;
}
