use async_trait::async_trait;
use license_report::prelude::*;

/// Mock OrgDataRepository serving feeds parsed from API-shaped JSON
pub struct MockOrgDataRepository {
    pub license_feed: LicenseFeed,
    pub dependency_feed: DependencyFeed,
    pub should_fail: bool,
}

impl MockOrgDataRepository {
    pub fn from_json(license_json: &str, dependency_json: &str) -> Self {
        Self {
            license_feed: serde_json::from_str(license_json).unwrap(),
            dependency_feed: serde_json::from_str(dependency_json).unwrap(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            license_feed: LicenseFeed::default(),
            dependency_feed: DependencyFeed::default(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl OrgDataRepository for MockOrgDataRepository {
    async fn fetch_license_data(&self, _org_id: &str, _filters: &ReportFilters) -> Result<LicenseFeed> {
        if self.should_fail {
            anyhow::bail!("Snyk API returned status code 401 Unauthorized");
        }
        Ok(self.license_feed.clone())
    }

    async fn fetch_dependencies_data(
        &self,
        _org_id: &str,
        _filters: &ReportFilters,
    ) -> Result<DependencyFeed> {
        if self.should_fail {
            anyhow::bail!("Snyk API returned status code 401 Unauthorized");
        }
        Ok(self.dependency_feed.clone())
    }
}
