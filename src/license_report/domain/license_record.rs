use super::dependency::DependencyStub;
use serde::{Deserialize, Serialize};
use std::fmt;

/// License severity configured on the organization's license policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseSeverity {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl LicenseSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseSeverity::None => "none",
            LicenseSeverity::Low => "low",
            LicenseSeverity::Medium => "medium",
            LicenseSeverity::High => "high",
            LicenseSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for LicenseSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a project of the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

impl ProjectRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One license entry of the organization's license feed
///
/// `id` may be a compound expression such as `"MIT OR Apache-2.0"` until the
/// record goes through `LicenseIdNormalizer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub id: String,
    #[serde(default)]
    pub severity: LicenseSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<DependencyStub>,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
}

impl LicenseRecord {
    pub fn new(id: impl Into<String>, severity: LicenseSeverity) -> Self {
        Self {
            id: id.into(),
            severity,
            instructions: None,
            dependencies: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_dependency(mut self, dependency: DependencyStub) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn with_project(mut self, project: ProjectRef) -> Self {
        self.projects.push(project);
        self
    }

    /// Clone of this record carrying a different license id
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }
}

/// Materialized license feed for an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseFeed {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<LicenseRecord>,
}

impl LicenseFeed {
    pub fn new(results: Vec<LicenseRecord>) -> Self {
        Self {
            total: results.len() as u64,
            results,
        }
    }
}
