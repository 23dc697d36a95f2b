use super::{build_http_client, join_url, DEFAULT_REQUEST_TIMEOUT};
use crate::license_report::domain::{DependencyFeed, LicenseFeed, ReportFilters};
use crate::ports::outbound::OrgDataRepository;
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Request body shared by both feed endpoints
#[derive(Debug, Serialize)]
struct FeedRequest<'a> {
    filters: &'a ReportFilters,
}

/// SnykOrgClient adapter for the organization license and dependency feeds
///
/// Both feeds are `POST` endpoints under `{api_base_url}/org/{org_id}/` that
/// take the report filters as a JSON body and answer with `{total, results}`.
pub struct SnykOrgClient {
    client: reqwest::Client,
    api_base_url: String,
    api_token: String,
}

impl SnykOrgClient {
    pub const DEFAULT_API_BASE_URL: &'static str = "https://api.snyk.io/v1";
    /// Page size requested from the dependencies feed
    const DEPENDENCIES_PER_PAGE: u32 = 1000;

    /// Creates a client against the public API with the default timeout
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_API_BASE_URL, api_token, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a client against a custom API base URL
    pub fn with_base_url(
        api_base_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_base_url: api_base_url.into(),
            api_token: api_token.into(),
        })
    }

    fn feed_url(&self, org_id: &str, feed: &str, query: &str) -> Result<String> {
        validate_path_component(org_id, "Organization id")?;
        let path = format!("org/{}/{}?{}", urlencoding::encode(org_id), feed, query);
        Ok(join_url(&self.api_base_url, &path))
    }

    async fn post_feed<T: DeserializeOwned>(
        &self,
        url: &str,
        filters: &ReportFilters,
    ) -> Result<T> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", self.api_token))
            .json(&FeedRequest { filters })
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Snyk API returned status code {} for {}", response.status(), url);
        }

        let feed = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))?;
        Ok(feed)
    }
}

#[async_trait]
impl OrgDataRepository for SnykOrgClient {
    async fn fetch_license_data(
        &self,
        org_id: &str,
        filters: &ReportFilters,
    ) -> Result<LicenseFeed> {
        let url = self.feed_url(org_id, "licenses", "sortBy=license&order=asc")?;
        self.post_feed(&url, filters).await
    }

    async fn fetch_dependencies_data(
        &self,
        org_id: &str,
        filters: &ReportFilters,
    ) -> Result<DependencyFeed> {
        let query = format!(
            "sortBy=dependency&order=asc&page=1&perPage={}",
            Self::DEPENDENCIES_PER_PAGE
        );
        let url = self.feed_url(org_id, "dependencies", &query)?;
        self.post_feed(&url, filters).await
    }
}
