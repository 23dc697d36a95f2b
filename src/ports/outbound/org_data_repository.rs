use crate::license_report::domain::{DependencyFeed, LicenseFeed, ReportFilters};
use crate::shared::Result;
use async_trait::async_trait;

/// OrgDataRepository port for fetching an organization's license and dependency feeds
///
/// Implementations return complete, already-paginated result sets.
#[async_trait]
pub trait OrgDataRepository: Send + Sync {
    /// Fetches the license policy feed of an organization
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed.
    /// The error reaches the caller of report generation unchanged.
    async fn fetch_license_data(&self, org_id: &str, filters: &ReportFilters)
        -> Result<LicenseFeed>;

    /// Fetches the dependency inventory feed of an organization
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn fetch_dependencies_data(
        &self,
        org_id: &str,
        filters: &ReportFilters,
    ) -> Result<DependencyFeed>;
}
