use super::license_record::LicenseSeverity;
use serde::{Deserialize, Serialize};

/// Filters forwarded to the organization feeds
///
/// Empty lists mean "no filter" and are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    /// Project ids to restrict the report to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,
    /// Dependency ids to restrict the report to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// License ids to restrict the report to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    /// License policy severities to restrict the report to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub severity: Vec<LicenseSeverity>,
}

impl ReportFilters {
    pub fn for_projects(projects: Vec<String>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.dependencies.is_empty()
            && self.licenses.is_empty()
            && self.severity.is_empty()
    }
}
