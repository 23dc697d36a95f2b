use super::license_record::ProjectRef;
use serde::{Deserialize, Serialize};

/// Minimal dependency record attached to a license in the license feed
///
/// `id` is a composite key, conventionally `name@version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyStub {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub package_manager: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Vec<String>>,
}

impl DependencyStub {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        package_manager: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let version = version.into();
        Self {
            id: format!("{}@{}", name, version),
            name,
            version,
            package_manager: package_manager.into(),
            copyright: None,
        }
    }
}

/// License declared by a dependency in the dependency feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyLicense {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub license: String,
}

/// Rich dependency record from the organization's dependency feed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyMetadata {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version_published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_versions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies_with_issues: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_critical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_high: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_low: Option<u32>,
    #[serde(default)]
    pub licenses: Vec<DependencyLicense>,
    #[serde(default)]
    pub projects: Vec<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Vec<String>>,
}

impl DependencyMetadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        let version = version.into();
        Self {
            id: format!("{}@{}", name, version),
            name,
            version,
            ..Self::default()
        }
    }
}

/// Materialized dependency feed for an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyFeed {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<DependencyMetadata>,
}

impl DependencyFeed {
    pub fn new(results: Vec<DependencyMetadata>) -> Self {
        Self {
            total: results.len() as u64,
            results,
        }
    }
}

/// Dependency stub joined with its metadata
///
/// Built only through [`EnrichedDependency::from_stub`] and
/// [`EnrichedDependency::merge`]. On key collision metadata wins over the
/// stub; `copyright` from the stub survives unless metadata defines one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDependency {
    id: String,
    name: String,
    version: String,
    package_manager: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latest_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latest_version_published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deprecated_versions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dependencies_with_issues: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issues_critical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issues_high: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issues_medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issues_low: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<DependencyLicense>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    projects: Option<Vec<ProjectRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    copyright: Option<Vec<String>>,
}

impl EnrichedDependency {
    /// Dependency with no metadata match: the stub unchanged
    pub fn from_stub(stub: DependencyStub) -> Self {
        Self {
            id: stub.id,
            name: stub.name,
            version: stub.version,
            package_manager: stub.package_manager,
            package_type: None,
            latest_version: None,
            latest_version_published_date: None,
            first_published_date: None,
            is_deprecated: None,
            deprecated_versions: None,
            dependencies_with_issues: None,
            issues_critical: None,
            issues_high: None,
            issues_medium: None,
            issues_low: None,
            licenses: None,
            projects: None,
            copyright: stub.copyright,
        }
    }

    /// Stub overlaid with a metadata record
    pub fn merge(stub: DependencyStub, metadata: &DependencyMetadata) -> Self {
        Self {
            id: metadata.id.clone(),
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            package_manager: stub.package_manager,
            package_type: metadata.package_type.clone(),
            latest_version: metadata.latest_version.clone(),
            latest_version_published_date: metadata.latest_version_published_date.clone(),
            first_published_date: metadata.first_published_date.clone(),
            is_deprecated: metadata.is_deprecated,
            deprecated_versions: metadata.deprecated_versions.clone(),
            dependencies_with_issues: metadata.dependencies_with_issues.clone(),
            issues_critical: metadata.issues_critical,
            issues_high: metadata.issues_high,
            issues_medium: metadata.issues_medium,
            issues_low: metadata.issues_low,
            licenses: Some(metadata.licenses.clone()),
            projects: Some(metadata.projects.clone()),
            copyright: metadata.copyright.clone().or(stub.copyright),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn package_manager(&self) -> &str {
        &self.package_manager
    }

    pub fn package_type(&self) -> Option<&str> {
        self.package_type.as_deref()
    }

    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    pub fn latest_version_published_date(&self) -> Option<&str> {
        self.latest_version_published_date.as_deref()
    }

    pub fn first_published_date(&self) -> Option<&str> {
        self.first_published_date.as_deref()
    }

    pub fn is_deprecated(&self) -> Option<bool> {
        self.is_deprecated
    }

    pub fn deprecated_versions(&self) -> Option<&[String]> {
        self.deprecated_versions.as_deref()
    }

    pub fn dependencies_with_issues(&self) -> Option<&[String]> {
        self.dependencies_with_issues.as_deref()
    }

    pub fn issues_critical(&self) -> Option<u32> {
        self.issues_critical
    }

    pub fn issues_high(&self) -> Option<u32> {
        self.issues_high
    }

    pub fn issues_medium(&self) -> Option<u32> {
        self.issues_medium
    }

    pub fn issues_low(&self) -> Option<u32> {
        self.issues_low
    }

    pub fn licenses(&self) -> Option<&[DependencyLicense]> {
        self.licenses.as_deref()
    }

    pub fn projects(&self) -> Option<&[ProjectRef]> {
        self.projects.as_deref()
    }

    pub fn copyright(&self) -> Option<&[String]> {
        self.copyright.as_deref()
    }

    /// Whether a metadata record was merged into this dependency
    pub fn has_metadata(&self) -> bool {
        self.licenses.is_some()
    }
}
