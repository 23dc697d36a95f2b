use crate::license_report::domain::LicenseText;
use crate::ports::outbound::LicenseTextRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingLicenseTextRepository wraps a LicenseTextRepository and adds in-memory caching.
///
/// Only successful lookups are cached, so a failed id is retried on the next
/// request. The cache is thread-safe and shared by clones of the `Arc`.
pub struct CachingLicenseTextRepository<R: LicenseTextRepository> {
    inner: R,
    cache: Arc<DashMap<String, LicenseText>>,
}

impl<R: LicenseTextRepository> CachingLicenseTextRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: LicenseTextRepository> LicenseTextRepository for CachingLicenseTextRepository<R> {
    async fn fetch_license_text(&self, license_id: &str) -> Result<LicenseText> {
        if let Some(cached) = self.cache.get(license_id) {
            return Ok(cached.clone());
        }

        let text = self.inner.fetch_license_text(license_id).await?;
        self.cache.insert(license_id.to_string(), text.clone());

        Ok(text)
    }
}
