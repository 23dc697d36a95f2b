use crate::license_report::domain::{DependencyStub, PackageCoordinates};
use crate::ports::outbound::{CopyrightRepository, ProgressReporter};
use std::collections::HashSet;

/// CopyrightFetcher - resolves copyright attributions for one dependency
///
/// Never fails: unknown package managers, non-success statuses and transport
/// or parse errors all degrade to an empty list and are only visible through
/// the reporter's debug output.
pub struct CopyrightFetcher<'a, CR, PR> {
    repository: &'a CR,
    progress_reporter: &'a PR,
}

impl<'a, CR, PR> CopyrightFetcher<'a, CR, PR>
where
    CR: CopyrightRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: &'a CR, progress_reporter: &'a PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Fetches the deduplicated attributions of a dependency, first-seen order
    pub async fn fetch_copyright(&self, dependency: &DependencyStub) -> Vec<String> {
        let Some(coordinates) = PackageCoordinates::from_dependency(dependency) else {
            self.progress_reporter.report_debug(&format!(
                "No attribution registry for package manager '{}' of {}",
                dependency.package_manager, dependency.id
            ));
            return Vec::new();
        };

        self.progress_reporter
            .report_debug(&format!("dep : {}", coordinates.path()));

        match self.repository.fetch_attributions(&coordinates).await {
            Ok(attributions) => dedup_preserving_order(attributions),
            Err(e) => {
                self.progress_reporter.report_debug(&format!(
                    "Did not fetch copyright attribution successfully for {}. Error: {}",
                    dependency.id, e
                ));
                Vec::new()
            }
        }
    }
}

/// Exact-equality dedup; near-duplicates differing in whitespace are kept
fn dedup_preserving_order(attributions: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    attributions
        .into_iter()
        .filter(|attribution| seen.insert(attribution.clone()))
        .collect()
}
