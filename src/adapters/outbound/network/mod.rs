/// Network adapters for external API calls
mod caching_license_text_repository;
mod clearly_defined_client;
mod snyk_client;
mod spdx_client;

pub use caching_license_text_repository::CachingLicenseTextRepository;
pub use clearly_defined_client::ClearlyDefinedClient;
pub use snyk_client::SnykOrgClient;
pub use spdx_client::SpdxLicenseTextClient;

use crate::shared::Result;
use std::time::Duration;

/// Default request timeout shared by the network adapters
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the async HTTP client used by every network adapter
fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let version = env!("CARGO_PKG_VERSION");
    let user_agent = format!("license-report/{}", version);
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Joins a base URL and a path without doubling the separator
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
