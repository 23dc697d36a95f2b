use async_trait::async_trait;
use license_report::prelude::*;
use std::collections::HashMap;

/// Mock CopyrightRepository keyed by definition path
#[derive(Default)]
pub struct MockCopyrightRepository {
    pub attributions: HashMap<String, Vec<String>>,
}

impl MockCopyrightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributions(mut self, path: &str, attributions: &[&str]) -> Self {
        self.attributions.insert(
            path.to_string(),
            attributions.iter().map(|a| a.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl CopyrightRepository for MockCopyrightRepository {
    async fn fetch_attributions(&self, coordinates: &PackageCoordinates) -> Result<Vec<String>> {
        match self.attributions.get(&coordinates.path()) {
            Some(found) => Ok(found.clone()),
            None => anyhow::bail!("ClearlyDefined API returned status code 404 Not Found"),
        }
    }
}
