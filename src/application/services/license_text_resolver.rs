use crate::license_report::domain::LicenseText;
use crate::ports::outbound::{LicenseTextRepository, ProgressReporter};

/// LicenseTextResolver - two-tier license text lookup
///
/// Tier 1 is the SPDX license list, tier 2 a non-SPDX (custom) source.
/// Returns `None` when both fail; callers leave the text fields empty.
pub struct LicenseTextResolver<'a, SR, NR, PR> {
    spdx_repository: &'a SR,
    non_spdx_repository: &'a NR,
    progress_reporter: &'a PR,
}

impl<'a, SR, NR, PR> LicenseTextResolver<'a, SR, NR, PR>
where
    SR: LicenseTextRepository,
    NR: LicenseTextRepository,
    PR: ProgressReporter,
{
    pub fn new(spdx_repository: &'a SR, non_spdx_repository: &'a NR, progress_reporter: &'a PR) -> Self {
        Self {
            spdx_repository,
            non_spdx_repository,
            progress_reporter,
        }
    }

    /// Resolves the text and URL of an atomic license id
    pub async fn resolve_text(&self, license_id: &str) -> Option<LicenseText> {
        match self.spdx_repository.fetch_license_text(license_id).await {
            Ok(text) => return Some(text),
            Err(e) => self.progress_reporter.report_debug(&format!(
                "❌ Failed to get license data as SPDX, trying non-SPDX: {} ({})",
                license_id, e
            )),
        }

        match self.non_spdx_repository.fetch_license_text(license_id).await {
            Ok(text) => Some(text),
            Err(e) => {
                self.progress_reporter.report_debug(&format!(
                    "❌ Failed to get license data as non-SPDX: {} ({})",
                    license_id, e
                ));
                None
            }
        }
    }
}
