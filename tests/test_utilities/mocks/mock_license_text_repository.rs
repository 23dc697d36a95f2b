use async_trait::async_trait;
use license_report::prelude::*;
use std::collections::HashMap;

/// Mock LicenseTextRepository with a fixed set of known ids
#[derive(Default)]
pub struct MockLicenseTextRepository {
    pub texts: HashMap<String, LicenseText>,
}

impl MockLicenseTextRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, license_id: &str, text: &str, url: &str) -> Self {
        self.texts
            .insert(license_id.to_string(), LicenseText::new(text, url));
        self
    }
}

#[async_trait]
impl LicenseTextRepository for MockLicenseTextRepository {
    async fn fetch_license_text(&self, license_id: &str) -> Result<LicenseText> {
        match self.texts.get(license_id) {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("License {} not found", license_id),
        }
    }
}
