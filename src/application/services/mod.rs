/// Application services
///
/// Each service wraps one or more outbound ports and absorbs their failures,
/// so a single bad dependency or license id never aborts a report.
mod copyright_fetcher;
mod dependency_enricher;
mod license_text_resolver;

pub use copyright_fetcher::CopyrightFetcher;
pub use dependency_enricher::{DependencyEnricher, DEFAULT_COPYRIGHT_CONCURRENCY};
pub use license_text_resolver::LicenseTextResolver;
