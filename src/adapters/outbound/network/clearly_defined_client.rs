use super::{build_http_client, join_url, DEFAULT_REQUEST_TIMEOUT};
use crate::license_report::domain::PackageCoordinates;
use crate::ports::outbound::CopyrightRepository;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
struct Definition {
    #[serde(default)]
    files: Vec<DefinitionFile>,
}

#[derive(Debug, Default, Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    attributions: Vec<String>,
}

impl Definition {
    /// Flattens the attributions of every file, in document order
    fn collect_attributions(self) -> Vec<String> {
        self.files
            .into_iter()
            .flat_map(|file| file.attributions)
            .collect()
    }
}

/// ClearlyDefinedClient adapter for copyright attribution lookups
///
/// Queries `{base_url}/{ecosystem}/{namespace}/{name}/{version}` and returns
/// the `attributions` found across the definition's `files`.
pub struct ClearlyDefinedClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClearlyDefinedClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.clearlydefined.io/definitions";

    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn definition_url(&self, coordinates: &PackageCoordinates) -> String {
        let path = format!(
            "{}/{}/{}/{}",
            coordinates.ecosystem().as_path(),
            urlencoding::encode(coordinates.namespace()),
            urlencoding::encode(coordinates.name()),
            urlencoding::encode(coordinates.version()),
        );
        join_url(&self.base_url, &path)
    }
}

#[async_trait]
impl CopyrightRepository for ClearlyDefinedClient {
    async fn fetch_attributions(&self, coordinates: &PackageCoordinates) -> Result<Vec<String>> {
        let url = self.definition_url(coordinates);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "ClearlyDefined API returned status code {} for {}",
                response.status(),
                url
            );
        }

        let definition: Definition = response.json().await?;
        Ok(definition.collect_attributions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_report::domain::{Ecosystem, NO_NAMESPACE};

    #[test]
    fn test_definition_url() {
        let client = ClearlyDefinedClient::new().unwrap();
        let coordinates =
            PackageCoordinates::new(Ecosystem::Npmjs, NO_NAMESPACE, "lodash", "4.17.21");
        assert_eq!(
            client.definition_url(&coordinates),
            "https://api.clearlydefined.io/definitions/npm/npmjs/-/lodash/4.17.21"
        );
    }

    #[test]
    fn test_definition_url_encodes_components() {
        let client = ClearlyDefinedClient::new().unwrap();
        let coordinates =
            PackageCoordinates::new(Ecosystem::Npmjs, NO_NAMESPACE, "@types/node", "20.1.0");
        assert_eq!(
            client.definition_url(&coordinates),
            "https://api.clearlydefined.io/definitions/npm/npmjs/-/%40types%2Fnode/20.1.0"
        );
    }

    #[test]
    fn test_collect_attributions_keeps_document_order_and_duplicates() {
        let definition: Definition = serde_json::from_str(
            r#"{
                "described": {"releaseDate": "2021-02-20"},
                "files": [
                    {"path": "package/LICENSE", "attributions": ["Copyright OpenJS Foundation"]},
                    {"path": "package/index.js"},
                    {"path": "package/fp.js", "attributions": ["Copyright Jeremy Ashkenas", "Copyright OpenJS Foundation"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            definition.collect_attributions(),
            vec![
                "Copyright OpenJS Foundation".to_string(),
                "Copyright Jeremy Ashkenas".to_string(),
                "Copyright OpenJS Foundation".to_string(),
            ]
        );
    }

    #[test]
    fn test_definition_without_files() {
        let definition: Definition = serde_json::from_str(r#"{"coordinates": {}}"#).unwrap();
        assert!(definition.collect_attributions().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let client =
            ClearlyDefinedClient::with_base_url("http://127.0.0.1:1", Duration::from_secs(2))
                .unwrap();
        let coordinates = PackageCoordinates::new(Ecosystem::PyPi, NO_NAMESPACE, "requests", "2.31.0");
        assert!(client.fetch_attributions(&coordinates).await.is_err());
    }
}
