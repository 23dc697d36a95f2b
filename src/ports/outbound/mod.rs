/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the organization feeds, license text sources, the copyright
/// attribution service and the diagnostic sink.
pub mod copyright_repository;
pub mod license_text_repository;
pub mod org_data_repository;
pub mod progress_reporter;

pub use copyright_repository::CopyrightRepository;
pub use license_text_repository::LicenseTextRepository;
pub use org_data_repository::OrgDataRepository;
pub use progress_reporter::ProgressReporter;
