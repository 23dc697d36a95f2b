use crate::application::dto::ReportOptions;
use crate::application::services::{
    CopyrightFetcher, DependencyEnricher, LicenseTextResolver, DEFAULT_COPYRIGHT_CONCURRENCY,
};
use crate::license_report::domain::{LicenseFeed, LicenseReportData};
use crate::license_report::services::{DependencyIndex, LicenseIdNormalizer};
use crate::ports::inbound::LicenseReportPort;
use crate::ports::outbound::{
    CopyrightRepository, LicenseTextRepository, OrgDataRepository, ProgressReporter,
};
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;

/// GenerateLicenseReportUseCase - Core use case for license report generation
///
/// This use case orchestrates the report workflow using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `OR` - OrgDataRepository implementation (license and dependency feeds)
/// * `CR` - CopyrightRepository implementation
/// * `SR` - LicenseTextRepository for SPDX license texts (tier 1)
/// * `NR` - LicenseTextRepository for non-SPDX license texts (tier 2)
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicenseReportUseCase<OR, CR, SR, NR, PR> {
    org_data_repository: OR,
    copyright_repository: CR,
    spdx_repository: SR,
    non_spdx_repository: NR,
    progress_reporter: PR,
    copyright_concurrency: usize,
}

impl<OR, CR, SR, NR, PR> GenerateLicenseReportUseCase<OR, CR, SR, NR, PR>
where
    OR: OrgDataRepository,
    CR: CopyrightRepository,
    SR: LicenseTextRepository,
    NR: LicenseTextRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLicenseReportUseCase with injected dependencies
    pub fn new(
        org_data_repository: OR,
        copyright_repository: CR,
        spdx_repository: SR,
        non_spdx_repository: NR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            org_data_repository,
            copyright_repository,
            spdx_repository,
            non_spdx_repository,
            progress_reporter,
            copyright_concurrency: DEFAULT_COPYRIGHT_CONCURRENCY,
        }
    }

    /// Sets the cap on concurrent copyright lookups per license
    pub fn with_copyright_concurrency(mut self, copyright_concurrency: usize) -> Self {
        self.copyright_concurrency = copyright_concurrency.max(1);
        self
    }

    /// Executes the license report use case
    ///
    /// # Arguments
    /// * `org_id` - Public id of the organization
    /// * `options` - Copyright switch and feed filters
    ///
    /// # Returns
    /// The report keyed by atomic license id
    ///
    /// # Errors
    /// Feed failures are returned unchanged; an organization without licenses
    /// yields `ReportError::NoLicensesConfigured`.
    pub async fn execute(&self, org_id: &str, options: &ReportOptions) -> Result<LicenseReportData> {
        self.progress_reporter
            .report(&format!("ℹ️  Generating license data for Org:{}", org_id));

        let result = self.generate_license_data(org_id, options).await;
        if let Err(e) = &result {
            self.progress_reporter
                .report_error(&format!("❌ Failed to generate report data: {}", e));
        }
        result
    }

    async fn generate_license_data(
        &self,
        org_id: &str,
        options: &ReportOptions,
    ) -> Result<LicenseReportData> {
        // Step 1: Fetch both feeds concurrently; either failure aborts
        let (license_feed, dependency_feed) = tokio::try_join!(
            self.org_data_repository
                .fetch_license_data(org_id, &options.filters),
            self.org_data_repository
                .fetch_dependencies_data(org_id, &options.filters),
        )?;

        // Step 2: An org without licenses is misconfigured, not compliant
        if license_feed.total == 0 {
            self.progress_reporter.report_debug("ℹ️  Detected 0 licenses");
            return Err(ReportError::NoLicensesConfigured {
                org_id: org_id.to_string(),
            }
            .into());
        }
        self.progress_reporter
            .report(&format!("✅ Got license API data for Org:{}", org_id));

        // Step 3: Dependencies are optional enrichment
        if dependency_feed.total == 0 {
            self.progress_reporter
                .report_debug("ℹ️  API returned 0 dependencies");
        } else {
            self.progress_reporter.report(&format!(
                "✅ Got {} dependencies API data for Org:{}",
                dependency_feed.total, org_id
            ));
        }
        let dependency_index = DependencyIndex::group(dependency_feed.results);

        // Step 4: Normalize, enrich, resolve and fold
        let total = license_feed.total;
        self.progress_reporter
            .report(&format!("⏳ Processing {} licenses", total));
        let report = self
            .merge_license_and_dependency_data(license_feed, &dependency_index, options.include_copyright)
            .await;
        self.progress_reporter.report_completion(&format!(
            "✅ Done processing {} licenses: {} license ids, {} dependencies",
            total,
            report.len(),
            report.dependency_count()
        ));

        Ok(report)
    }

    /// Folds a license feed into a report
    ///
    /// Licenses are processed strictly in feed order (after splitting compound
    /// ids) so `severities` and `dependencies` concatenate deterministically.
    /// Records without dependencies contribute nothing.
    pub async fn merge_license_and_dependency_data(
        &self,
        license_feed: LicenseFeed,
        dependency_index: &DependencyIndex,
        include_copyright: bool,
    ) -> LicenseReportData {
        let mut report = LicenseReportData::new();

        if license_feed.total == 0 {
            self.progress_reporter.report_debug("ℹ️  API returned 0 licenses");
            return report;
        }

        for record in &license_feed.results {
            if LicenseIdNormalizer::is_compound(&record.id) {
                self.progress_reporter.report_debug(&format!(
                    "Splitting up a multi license: {:?}",
                    LicenseIdNormalizer::split(&record.id)
                ));
            }
        }
        let licenses = LicenseIdNormalizer::normalize(license_feed.results);

        let enricher = DependencyEnricher::new(
            CopyrightFetcher::new(&self.copyright_repository, &self.progress_reporter),
            self.copyright_concurrency,
        );
        let resolver = LicenseTextResolver::new(
            &self.spdx_repository,
            &self.non_spdx_repository,
            &self.progress_reporter,
        );

        let total = licenses.len();
        for (idx, mut license) in licenses.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(license.id.as_str()));

            if license.dependencies.is_empty() {
                continue;
            }

            let dependencies = std::mem::take(&mut license.dependencies);
            let enriched = enricher
                .enrich(dependencies, dependency_index, include_copyright)
                .await;
            let license_text = resolver.resolve_text(&license.id).await;

            report.fold(license, enriched, license_text);
        }

        report
    }
}

#[async_trait]
impl<OR, CR, SR, NR, PR> LicenseReportPort for GenerateLicenseReportUseCase<OR, CR, SR, NR, PR>
where
    OR: OrgDataRepository,
    CR: CopyrightRepository,
    SR: LicenseTextRepository,
    NR: LicenseTextRepository,
    PR: ProgressReporter,
{
    async fn generate(&self, org_id: &str, options: &ReportOptions) -> Result<LicenseReportData> {
        self.execute(org_id, options).await
    }
}
