use super::dependency::EnrichedDependency;
use super::license_record::{LicenseRecord, LicenseSeverity, ProjectRef};
use super::license_text::LicenseText;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Report entry for one atomic license id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    severity: Option<LicenseSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
    dependencies: Vec<EnrichedDependency>,
    severities: Vec<LicenseSeverity>,
    projects: Vec<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license_url: Option<String>,
}

impl ReportEntry {
    /// Creates the entry from the first record folded under its id
    pub fn new(
        record: LicenseRecord,
        dependencies: Vec<EnrichedDependency>,
        license_text: Option<LicenseText>,
    ) -> Self {
        let (license_text, license_url) = match license_text.map(LicenseText::into_parts) {
            Some((text, url)) => (Some(text), Some(url)),
            None => (None, None),
        };

        Self {
            id: record.id,
            severity: Some(record.severity),
            instructions: record.instructions,
            dependencies,
            severities: vec![record.severity],
            projects: record.projects,
            license_text,
            license_url,
        }
    }

    /// Folds another record with the same id into this entry
    ///
    /// Dependencies are appended without deduplication; the severity is
    /// pushed even when already present.
    pub fn absorb(&mut self, severity: LicenseSeverity, dependencies: Vec<EnrichedDependency>) {
        self.dependencies.extend(dependencies);
        self.severities.push(severity);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn severity(&self) -> Option<LicenseSeverity> {
        self.severity
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn dependencies(&self) -> &[EnrichedDependency] {
        &self.dependencies
    }

    pub fn severities(&self) -> &[LicenseSeverity] {
        &self.severities
    }

    pub fn projects(&self) -> &[ProjectRef] {
        &self.projects
    }

    pub fn license_text(&self) -> Option<&str> {
        self.license_text.as_deref()
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }
}

/// License report keyed by atomic license id
///
/// Serializes as a plain JSON object so templates can iterate it directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseReportData {
    entries: BTreeMap<String, ReportEntry>,
}

impl LicenseReportData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a normalized record and its enriched dependencies into the report
    ///
    /// `license_text` is only used when this is the first record for the id.
    pub fn fold(
        &mut self,
        record: LicenseRecord,
        dependencies: Vec<EnrichedDependency>,
        license_text: Option<LicenseText>,
    ) {
        match self.entries.entry(record.id.clone()) {
            btree_map::Entry::Occupied(mut occupied) => {
                occupied.get_mut().absorb(record.severity, dependencies);
            }
            btree_map::Entry::Vacant(vacant) => {
                vacant.insert(ReportEntry::new(record, dependencies, license_text));
            }
        }
    }

    pub fn get(&self, license_id: &str) -> Option<&ReportEntry> {
        self.entries.get(license_id)
    }

    pub fn contains(&self, license_id: &str) -> bool {
        self.entries.contains_key(license_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Total number of dependency rows across all entries
    pub fn dependency_count(&self) -> usize {
        self.entries.values().map(|e| e.dependencies.len()).sum()
    }
}

impl IntoIterator for LicenseReportData {
    type Item = (String, ReportEntry);
    type IntoIter = btree_map::IntoIter<String, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_report::domain::DependencyStub;

    fn enriched(name: &str) -> EnrichedDependency {
        EnrichedDependency::from_stub(DependencyStub::new(name, "1.0.0", "npm"))
    }

    #[test]
    fn test_fold_creates_entry() {
        let mut report = LicenseReportData::new();
        let record = LicenseRecord::new("MIT", LicenseSeverity::High)
            .with_instructions("Allowed")
            .with_project(ProjectRef::new("p1", "web"));

        report.fold(
            record,
            vec![enriched("a")],
            Some(LicenseText::new("MIT text", "https://spdx.org/licenses/MIT.html")),
        );

        let entry = report.get("MIT").unwrap();
        assert_eq!(entry.id(), "MIT");
        assert_eq!(entry.severity(), Some(LicenseSeverity::High));
        assert_eq!(entry.instructions(), Some("Allowed"));
        assert_eq!(entry.severities(), &[LicenseSeverity::High]);
        assert_eq!(entry.dependencies().len(), 1);
        assert_eq!(entry.projects().len(), 1);
        assert_eq!(entry.license_text(), Some("MIT text"));
        assert_eq!(entry.license_url(), Some("https://spdx.org/licenses/MIT.html"));
    }

    #[test]
    fn test_fold_without_text_leaves_fields_empty() {
        let mut report = LicenseReportData::new();
        report.fold(
            LicenseRecord::new("0BSD", LicenseSeverity::Low),
            vec![enriched("a")],
            None,
        );
        let entry = report.get("0BSD").unwrap();
        assert!(entry.license_text().is_none());
        assert!(entry.license_url().is_none());
    }

    #[test]
    fn test_fold_same_id_concatenates() {
        let mut report = LicenseReportData::new();
        report.fold(
            LicenseRecord::new("MIT", LicenseSeverity::High),
            vec![enriched("a")],
            Some(LicenseText::new("first", "u1")),
        );
        report.fold(
            LicenseRecord::new("MIT", LicenseSeverity::Low),
            vec![enriched("a"), enriched("b")],
            Some(LicenseText::new("second", "u2")),
        );

        assert_eq!(report.len(), 1);
        let entry = report.get("MIT").unwrap();
        assert_eq!(
            entry.severities(),
            &[LicenseSeverity::High, LicenseSeverity::Low]
        );
        let names: Vec<&str> = entry.dependencies().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["a", "a", "b"]);
        assert_eq!(entry.severity(), Some(LicenseSeverity::High));
        assert_eq!(entry.license_text(), Some("first"));
        assert_eq!(report.dependency_count(), 3);
    }

    #[test]
    fn test_report_serializes_as_object() {
        let mut report = LicenseReportData::new();
        report.fold(
            LicenseRecord::new("MIT", LicenseSeverity::Medium),
            vec![enriched("a")],
            None,
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["MIT"]["id"], "MIT");
        assert_eq!(value["MIT"]["severities"][0], "medium");
        assert_eq!(value["MIT"]["dependencies"][0]["packageManager"], "npm");
        assert!(value["MIT"].get("licenseText").is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = LicenseReportData::new();
        assert!(report.is_empty());
        assert_eq!(report.dependency_count(), 0);
        assert_eq!(report.license_ids().count(), 0);
    }
}
