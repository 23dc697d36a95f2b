pub mod dependency;
pub mod filters;
pub mod license_record;
pub mod license_text;
pub mod package_manager;
pub mod report;

pub use dependency::{
    DependencyFeed, DependencyLicense, DependencyMetadata, DependencyStub, EnrichedDependency,
};
pub use filters::ReportFilters;
pub use license_record::{LicenseFeed, LicenseRecord, LicenseSeverity, ProjectRef};
pub use license_text::LicenseText;
pub use package_manager::{Ecosystem, PackageCoordinates, PackageManager, NO_NAMESPACE};
pub use report::{LicenseReportData, ReportEntry};
