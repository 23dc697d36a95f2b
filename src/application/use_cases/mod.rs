/// Use cases module containing application business logic orchestration
mod generate_license_report;

pub use generate_license_report::GenerateLicenseReportUseCase;
