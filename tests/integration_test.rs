/// Integration tests for the application layer
mod test_utilities;

use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;
use license_report::prelude::*;

const LICENSES_JSON: &str = r#"{
  "total": 3,
  "results": [
    {
      "id": "MIT OR Apache-2.0",
      "severity": "high",
      "instructions": "Check with legal before shipping",
      "dependencies": [
        {"id": "lodash@4.17.21", "name": "lodash", "version": "4.17.21", "packageManager": "npm"}
      ],
      "projects": [{"id": "p-web", "name": "acme/web"}]
    },
    {
      "id": "MIT",
      "severity": "low",
      "dependencies": [
        {"id": "org.slf4j:slf4j-api@2.0.9", "name": "org.slf4j:slf4j-api", "version": "2.0.9", "packageManager": "maven"}
      ],
      "projects": [{"id": "p-api", "name": "acme/api"}]
    },
    {
      "id": "Acme-Internal",
      "severity": "none",
      "dependencies": [
        {"id": "acme-utils@1.2.0", "name": "acme-utils", "version": "1.2.0", "packageManager": "pip"}
      ],
      "projects": []
    }
  ]
}"#;

const DEPENDENCIES_JSON: &str = r#"{
  "total": 1,
  "results": [
    {
      "id": "lodash@4.17.21",
      "name": "lodash",
      "version": "4.17.21",
      "type": "npm",
      "latestVersion": "4.17.21",
      "isDeprecated": false,
      "issuesHigh": 0,
      "licenses": [{"id": "snyk:lic:npm:lodash:MIT", "title": "MIT license", "license": "MIT"}],
      "projects": [{"id": "p-web", "name": "acme/web"}]
    }
  ]
}"#;

fn spdx_texts() -> MockLicenseTextRepository {
    MockLicenseTextRepository::new()
        .with_text("MIT", "MIT License", "https://spdx.org/licenses/MIT.html")
        .with_text(
            "Apache-2.0",
            "Apache License 2.0",
            "https://spdx.org/licenses/Apache-2.0.html",
        )
}

#[tokio::test]
async fn test_generate_report_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateLicenseReportUseCase::new(
        MockOrgDataRepository::from_json(LICENSES_JSON, DEPENDENCIES_JSON),
        MockCopyrightRepository::new(),
        spdx_texts(),
        MockLicenseTextRepository::new(),
        progress_reporter.clone(),
    );

    let report = use_case
        .execute("acme", &ReportOptions::default())
        .await
        .unwrap();

    let ids: Vec<&str> = report.license_ids().collect();
    assert_eq!(ids, vec!["Acme-Internal", "Apache-2.0", "MIT"]);
    assert_eq!(report.dependency_count(), 4);

    let mit = report.get("MIT").unwrap();
    assert_eq!(mit.severity(), Some(LicenseSeverity::High));
    assert_eq!(mit.severities(), &[LicenseSeverity::High, LicenseSeverity::Low]);
    assert_eq!(mit.instructions(), Some("Check with legal before shipping"));
    assert_eq!(mit.projects().len(), 1);
    assert_eq!(mit.projects()[0].name, "acme/web");
    assert_eq!(mit.license_text(), Some("MIT License"));

    let lodash = &mit.dependencies()[0];
    assert!(lodash.has_metadata());
    assert_eq!(lodash.package_manager(), "npm");
    assert_eq!(lodash.package_type(), Some("npm"));
    assert_eq!(lodash.latest_version(), Some("4.17.21"));
    assert_eq!(lodash.licenses().unwrap()[0].license, "MIT");

    let slf4j = &mit.dependencies()[1];
    assert!(!slf4j.has_metadata());
    assert_eq!(slf4j.id(), "org.slf4j:slf4j-api@2.0.9");

    let apache = report.get("Apache-2.0").unwrap();
    assert_eq!(apache.severities(), &[LicenseSeverity::High]);
    assert_eq!(apache.license_url(), Some("https://spdx.org/licenses/Apache-2.0.html"));

    let internal = report.get("Acme-Internal").unwrap();
    assert!(internal.license_text().is_none());
    assert!(internal.license_url().is_none());

    assert!(progress_reporter.contains("Splitting up a multi license"));
    assert!(progress_reporter.contains("Got 1 dependencies API data for Org:acme"));
    assert!(progress_reporter.contains("Completed: "));
}

#[tokio::test]
async fn test_generate_report_with_copyright() {
    let copyright_repository = MockCopyrightRepository::new()
        .with_attributions(
            "npm/npmjs/-/lodash/4.17.21",
            &["Copyright OpenJS Foundation", "Copyright OpenJS Foundation"],
        )
        .with_attributions(
            "maven/mavencentral/org.slf4j/slf4j-api/2.0.9",
            &["Copyright (c) 2004-2023 QOS.ch"],
        );
    let use_case = GenerateLicenseReportUseCase::new(
        MockOrgDataRepository::from_json(LICENSES_JSON, DEPENDENCIES_JSON),
        copyright_repository,
        spdx_texts(),
        MockLicenseTextRepository::new(),
        MockProgressReporter::new(),
    );
    let options = ReportOptions::builder()
        .include_copyright(true)
        .build()
        .unwrap();

    let report = use_case.execute("acme", &options).await.unwrap();

    let mit = report.get("MIT").unwrap();
    assert_eq!(
        mit.dependencies()[0].copyright(),
        Some(&["Copyright OpenJS Foundation".to_string()][..])
    );
    assert_eq!(
        mit.dependencies()[1].copyright(),
        Some(&["Copyright (c) 2004-2023 QOS.ch".to_string()][..])
    );

    // No attribution on record for the pip package: absorbed as empty
    let internal = report.get("Acme-Internal").unwrap();
    assert_eq!(internal.dependencies()[0].copyright(), Some(&[][..]));
}

#[tokio::test]
async fn test_generate_report_custom_license_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("Acme-Internal.txt"),
        "Internal use only.",
    )
    .unwrap();

    let use_case = GenerateLicenseReportUseCase::new(
        MockOrgDataRepository::from_json(LICENSES_JSON, DEPENDENCIES_JSON),
        MockCopyrightRepository::new(),
        spdx_texts(),
        CachingLicenseTextRepository::new(FileSystemLicenseTextReader::new(temp_dir.path())),
        MockProgressReporter::new(),
    );

    let report = use_case
        .execute("acme", &ReportOptions::default())
        .await
        .unwrap();

    let internal = report.get("Acme-Internal").unwrap();
    assert_eq!(internal.license_text(), Some("Internal use only."));
    assert!(internal.license_url().unwrap().starts_with("file://"));
}

#[tokio::test]
async fn test_generate_report_feed_failure() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateLicenseReportUseCase::new(
        MockOrgDataRepository::with_failure(),
        MockCopyrightRepository::new(),
        spdx_texts(),
        MockLicenseTextRepository::new(),
        progress_reporter.clone(),
    );

    let result = use_case.execute("acme", &ReportOptions::default()).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("401"));
    assert!(progress_reporter.contains("Error: ❌ Failed to generate report data"));
}

#[tokio::test]
async fn test_generate_report_no_licenses() {
    let use_case = GenerateLicenseReportUseCase::new(
        MockOrgDataRepository::from_json(
            r#"{"total": 0, "results": []}"#,
            DEPENDENCIES_JSON,
        ),
        MockCopyrightRepository::new(),
        spdx_texts(),
        MockLicenseTextRepository::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute("acme", &ReportOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::NoLicensesConfigured { .. })
    ));
    assert!(err.to_string().contains("licenses configured"));
}

#[tokio::test]
async fn test_report_serializes_as_map_keyed_by_license_id() {
    let use_case = GenerateLicenseReportUseCase::new(
        MockOrgDataRepository::from_json(LICENSES_JSON, DEPENDENCIES_JSON),
        MockCopyrightRepository::new(),
        spdx_texts(),
        MockLicenseTextRepository::new(),
        MockProgressReporter::new(),
    );

    let report = use_case
        .execute("acme", &ReportOptions::default())
        .await
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["MIT"]["severities"], serde_json::json!(["high", "low"]));
    assert_eq!(json["MIT"]["licenseUrl"], "https://spdx.org/licenses/MIT.html");
    assert_eq!(json["MIT"]["dependencies"][0]["latestVersion"], "4.17.21");
    assert!(json["Acme-Internal"].get("licenseText").is_none());
}

#[test]
fn test_options_builder_rejects_blank_filter() {
    let result = ReportOptions::builder().projects(["p-web", " "]).build();
    assert!(result.is_err());
}
