use crate::license_report::domain::{LicenseSeverity, ReportFilters};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// ReportOptions - Request DTO for license report generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    /// Whether to look up copyright attributions for every dependency
    pub include_copyright: bool,
    /// Filters forwarded to both organization feeds
    pub filters: ReportFilters,
}

impl ReportOptions {
    pub fn new(include_copyright: bool, filters: ReportFilters) -> Self {
        Self {
            include_copyright,
            filters,
        }
    }

    pub fn builder() -> ReportOptionsBuilder {
        ReportOptionsBuilder::default()
    }
}

/// Builder for [`ReportOptions`] that rejects blank filter values
#[derive(Debug, Default)]
pub struct ReportOptionsBuilder {
    include_copyright: bool,
    filters: ReportFilters,
}

impl ReportOptionsBuilder {
    pub fn include_copyright(mut self, include_copyright: bool) -> Self {
        self.include_copyright = include_copyright;
        self
    }

    pub fn projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn licenses<I, S>(mut self, licenses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.licenses = licenses.into_iter().map(Into::into).collect();
        self
    }

    pub fn severities(mut self, severities: Vec<LicenseSeverity>) -> Self {
        self.filters.severity = severities;
        self
    }

    pub fn build(self) -> Result<ReportOptions> {
        for (name, values) in [
            ("projects", &self.filters.projects),
            ("dependencies", &self.filters.dependencies),
            ("licenses", &self.filters.licenses),
        ] {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(ReportError::Validation {
                    message: format!("{} filter must not contain empty values", name),
                }
                .into());
            }
        }

        Ok(ReportOptions::new(self.include_copyright, self.filters))
    }
}
