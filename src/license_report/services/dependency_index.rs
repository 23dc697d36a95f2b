use crate::license_report::domain::DependencyMetadata;
use std::collections::HashMap;

/// Dependency metadata grouped by dependency id
///
/// Records sharing an id keep their feed order; joins only ever use the
/// first one.
#[derive(Debug, Clone, Default)]
pub struct DependencyIndex {
    by_id: HashMap<String, Vec<DependencyMetadata>>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups metadata records by id
    pub fn group(records: Vec<DependencyMetadata>) -> Self {
        let mut by_id: HashMap<String, Vec<DependencyMetadata>> = HashMap::new();
        for record in records {
            by_id.entry(record.id.clone()).or_default().push(record);
        }
        Self { by_id }
    }

    /// All metadata records for an id, in feed order
    pub fn get(&self, dependency_id: &str) -> Option<&[DependencyMetadata]> {
        self.by_id.get(dependency_id).map(Vec::as_slice)
    }

    /// First metadata record for an id
    pub fn first(&self, dependency_id: &str) -> Option<&DependencyMetadata> {
        self.by_id.get(dependency_id).and_then(|records| records.first())
    }

    /// Number of distinct dependency ids
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromIterator<DependencyMetadata> for DependencyIndex {
    fn from_iter<I: IntoIterator<Item = DependencyMetadata>>(iter: I) -> Self {
        Self::group(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name: &str, version: &str, latest: &str) -> DependencyMetadata {
        let mut record = DependencyMetadata::new(name, version);
        record.latest_version = Some(latest.to_string());
        record
    }

    #[test]
    fn test_group_preserves_duplicates_in_order() {
        let index = DependencyIndex::group(vec![
            metadata("a", "1.0.0", "first"),
            metadata("b", "2.0.0", "only"),
            metadata("a", "1.0.0", "second"),
        ]);

        assert_eq!(index.len(), 2);
        let records = index.get("a@1.0.0").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].latest_version.as_deref(), Some("first"));
        assert_eq!(records[1].latest_version.as_deref(), Some("second"));
    }

    #[test]
    fn test_first_returns_first_record() {
        let index: DependencyIndex = vec![
            metadata("a", "1.0.0", "first"),
            metadata("a", "1.0.0", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            index.first("a@1.0.0").unwrap().latest_version.as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_missing_id() {
        let index = DependencyIndex::new();
        assert!(index.is_empty());
        assert!(index.get("x@1").is_none());
        assert!(index.first("x@1").is_none());
    }
}
