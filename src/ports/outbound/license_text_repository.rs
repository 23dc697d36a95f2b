use crate::license_report::domain::LicenseText;
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseTextRepository port for looking up the text of a license by id
#[async_trait]
pub trait LicenseTextRepository: Send + Sync {
    /// Fetches the text and source URL of a license
    ///
    /// # Errors
    /// Returns an error if the license is unknown to this source or the
    /// lookup fails.
    async fn fetch_license_text(&self, license_id: &str) -> Result<LicenseText>;
}
