use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for license report generation.
///
/// Only configuration problems are typed here. Failures coming from the
/// organization feeds are propagated as-is so callers see the original error.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The organization returned zero licenses; treated as misconfiguration.
    #[error("No licenses returned for org {org_id}. Please make sure the org has licenses configured and try again.")]
    NoLicensesConfigured { org_id: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read license text: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the custom licenses directory exists and is readable")]
    LicenseTextReadError { path: PathBuf, details: String },

    #[error("Security violation: {input}\nReason: {reason}")]
    SecurityError { input: String, reason: String },
}
