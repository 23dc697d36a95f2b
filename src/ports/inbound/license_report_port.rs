use crate::application::dto::ReportOptions;
use crate::license_report::domain::LicenseReportData;
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseReportPort - Inbound port for license report generation
///
/// This is the sole entry point of the aggregation engine. The returned
/// `LicenseReportData` is the contract consumed by template rendering.
#[async_trait]
pub trait LicenseReportPort: Send + Sync {
    /// Generates the license report of an organization
    ///
    /// # Arguments
    /// * `org_id` - Public id of the organization
    /// * `options` - Copyright enrichment switch and feed filters
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either organization feed cannot be fetched (error passed through unchanged)
    /// - The organization has no licenses configured (`ReportError::NoLicensesConfigured`)
    ///
    /// License text and copyright lookups never fail the report.
    async fn generate(&self, org_id: &str, options: &ReportOptions) -> Result<LicenseReportData>;
}
