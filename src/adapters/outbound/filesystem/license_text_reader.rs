use crate::license_report::domain::LicenseText;
use crate::ports::outbound::LicenseTextRepository;
use crate::shared::error::ReportError;
use crate::shared::security::{
    validate_path_component, validate_regular_file, MAX_LICENSE_FILE_SIZE,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// FileSystemLicenseTextReader adapter for non-SPDX license texts
///
/// Looks up `{licenses_dir}/{license_id}.txt` and reports the file as a
/// `file://` URL. Symlinks, non-regular files and files over
/// `MAX_LICENSE_FILE_SIZE` are refused.
pub struct FileSystemLicenseTextReader {
    licenses_dir: PathBuf,
}

impl FileSystemLicenseTextReader {
    pub fn new(licenses_dir: impl Into<PathBuf>) -> Self {
        Self {
            licenses_dir: licenses_dir.into(),
        }
    }

    pub fn licenses_dir(&self) -> &Path {
        &self.licenses_dir
    }

    fn license_path(&self, license_id: &str) -> Result<PathBuf> {
        validate_path_component(license_id, "License id")?;
        Ok(self.licenses_dir.join(format!("{}.txt", license_id)))
    }
}

#[async_trait]
impl LicenseTextRepository for FileSystemLicenseTextReader {
    async fn fetch_license_text(&self, license_id: &str) -> Result<LicenseText> {
        let path = self.license_path(license_id)?;
        validate_regular_file(&path, "license text file", MAX_LICENSE_FILE_SIZE)?;

        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            ReportError::LicenseTextReadError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        Ok(LicenseText::new(text, format!("file://{}", path.display())))
    }
}
