use super::{build_http_client, join_url, DEFAULT_REQUEST_TIMEOUT};
use crate::license_report::domain::LicenseText;
use crate::ports::outbound::{LicenseTextRepository, ProgressReporter};
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;

/// SpdxLicenseTextClient adapter for the SPDX license list pages
///
/// Fetches `{base_url}/{id}.html` and keeps the text content of the page body.
pub struct SpdxLicenseTextClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpdxLicenseTextClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://spdx.org/licenses";

    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Page URL of a license id
    pub fn license_url(&self, license_id: &str) -> String {
        join_url(
            &self.base_url,
            &format!("{}.html", urlencoding::encode(license_id)),
        )
    }

    /// Fetches the license text, falling back to a placeholder that points at
    /// the license page when the lookup fails
    ///
    /// The failure, including the body of a non-success response, goes to
    /// `progress_reporter` as a debug line.
    pub async fn fetch_license_text_or_placeholder<PR: ProgressReporter>(
        &self,
        license_id: &str,
        progress_reporter: &PR,
    ) -> LicenseText {
        match self.fetch_license_text(license_id).await {
            Ok(text) => text,
            Err(e) => {
                progress_reporter.report_debug(&format!(
                    "Did not fetch license text successfully for {}. Error: {}",
                    license_id, e
                ));
                LicenseText::placeholder(self.license_url(license_id))
            }
        }
    }
}

/// Extracts the text content of the `<body>` element
fn extract_body_text(raw_html: &str) -> Result<String> {
    let document = Html::parse_document(raw_html);
    let selector =
        Selector::parse("body").map_err(|e| anyhow::anyhow!("Invalid selector: {}", e))?;
    Ok(document
        .select(&selector)
        .next()
        .map(|body| body.text().collect::<String>())
        .unwrap_or_default())
}

#[async_trait]
impl LicenseTextRepository for SpdxLicenseTextClient {
    async fn fetch_license_text(&self, license_id: &str) -> Result<LicenseText> {
        validate_path_component(license_id, "License id")?;

        let url = self.license_url(license_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let raw_html = response.text().await?;

        if !status.is_success() {
            anyhow::bail!("SPDX returned status code {} for {}: {}", status, url, raw_html);
        }

        let text = extract_body_text(&raw_html)?;
        Ok(LicenseText::new(text, url))
    }
}
