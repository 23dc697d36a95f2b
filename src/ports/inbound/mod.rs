/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that outer code (CLI, rendering)
/// uses to interact with the application core.
pub mod license_report_port;

pub use license_report_port::LicenseReportPort;
