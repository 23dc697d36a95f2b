use crate::license_report::domain::PackageCoordinates;
use crate::shared::Result;
use async_trait::async_trait;

/// CopyrightRepository port for fetching copyright attributions of a package
#[async_trait]
pub trait CopyrightRepository: Send + Sync {
    /// Fetches every attribution string of a package, in document order
    ///
    /// Duplicates are returned as found.
    ///
    /// # Errors
    /// Returns an error on a non-success status, a transport failure or an
    /// unparsable response.
    async fn fetch_attributions(&self, coordinates: &PackageCoordinates) -> Result<Vec<String>>;
}
