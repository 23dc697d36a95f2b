/// Data Transfer Objects for application layer
///
/// DTOs carry caller options into the use case, keeping the domain layer
/// isolated from how outer code collects them.
mod report_options;

pub use report_options::{ReportOptions, ReportOptionsBuilder};
