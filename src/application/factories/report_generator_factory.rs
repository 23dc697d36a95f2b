use crate::adapters::outbound::console::StderrProgressReporter;
use crate::adapters::outbound::filesystem::FileSystemLicenseTextReader;
use crate::adapters::outbound::network::{
    CachingLicenseTextRepository, ClearlyDefinedClient, SnykOrgClient, SpdxLicenseTextClient,
};
use crate::application::dto::ReportOptions;
use crate::application::use_cases::GenerateLicenseReportUseCase;
use crate::config::ReportSettings;
use crate::license_report::domain::ReportFilters;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::PathBuf;

/// Directory searched for custom license texts when none is configured
pub const DEFAULT_CUSTOM_LICENSES_DIR: &str = "licenses";

/// Report generator wired with the production adapters
pub type DefaultReportGenerator = GenerateLicenseReportUseCase<
    SnykOrgClient,
    ClearlyDefinedClient,
    CachingLicenseTextRepository<SpdxLicenseTextClient>,
    CachingLicenseTextRepository<FileSystemLicenseTextReader>,
    StderrProgressReporter,
>;

/// Factory for creating a report generator from resolved settings
///
/// This factory encapsulates the adapter selection so callers only deal with
/// settings, an API token and the `LicenseReportPort`.
pub struct ReportGeneratorFactory;

impl ReportGeneratorFactory {
    /// Creates a report generator
    ///
    /// The license text caches belong to the returned generator and are
    /// reused by every `generate` call on it; build a new generator to start
    /// with empty caches.
    ///
    /// # Arguments
    /// * `settings` - Resolved configuration
    /// * `api_token` - Token for the organization API, supplied by the caller
    ///
    /// # Errors
    /// Returns a validation error for a blank token, or an error if an HTTP
    /// client cannot be built.
    pub fn create(settings: &ReportSettings, api_token: &str) -> Result<DefaultReportGenerator> {
        if api_token.trim().is_empty() {
            return Err(ReportError::Validation {
                message: "API token must not be empty".to_string(),
            }
            .into());
        }

        let org_client = SnykOrgClient::with_base_url(
            settings.api_base_url.clone(),
            api_token,
            settings.request_timeout,
        )?;
        let copyright_client = ClearlyDefinedClient::with_base_url(
            settings.copyright_base_url.clone(),
            settings.request_timeout,
        )?;
        let spdx_client = SpdxLicenseTextClient::with_base_url(
            settings.spdx_base_url.clone(),
            settings.request_timeout,
        )?;
        let custom_reader = FileSystemLicenseTextReader::new(
            settings
                .custom_licenses_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CUSTOM_LICENSES_DIR)),
        );
        let progress_reporter = if settings.verbose {
            StderrProgressReporter::verbose()
        } else {
            StderrProgressReporter::new()
        };

        Ok(GenerateLicenseReportUseCase::new(
            org_client,
            copyright_client,
            CachingLicenseTextRepository::new(spdx_client),
            CachingLicenseTextRepository::new(custom_reader),
            progress_reporter,
        )
        .with_copyright_concurrency(settings.copyright_concurrency))
    }

    /// Builds report options from settings and caller-supplied filters
    pub fn options(settings: &ReportSettings, filters: ReportFilters) -> ReportOptions {
        ReportOptions::new(settings.include_copyright, filters)
    }
}
