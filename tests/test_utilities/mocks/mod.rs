//! Mock implementations for testing

mod mock_copyright_repository;
mod mock_license_text_repository;
mod mock_org_data_repository;
mod mock_progress_reporter;

pub use mock_copyright_repository::MockCopyrightRepository;
pub use mock_license_text_repository::MockLicenseTextRepository;
pub use mock_org_data_repository::MockOrgDataRepository;
pub use mock_progress_reporter::MockProgressReporter;
