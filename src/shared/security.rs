use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a custom license text file (1 MB)
pub const MAX_LICENSE_FILE_SIZE: u64 = 1024 * 1024;

/// Validates an identifier before it is used as a URL path segment or file name
///
/// # Security
/// Rejects path separators, parent directory references and URL-unsafe
/// characters so an id coming from an upstream feed cannot escape the
/// endpoint or directory it is joined onto.
///
/// # Arguments
/// * `component` - The value to validate
/// * `component_type` - Description used in the error message (e.g. "License id")
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    let reason = if component.is_empty() {
        Some(format!("{} must not be empty", component_type))
    } else if component.contains('/') || component.contains('\\') {
        Some(format!(
            "{} contains path separators which are not allowed",
            component_type
        ))
    } else if component.contains("..") {
        Some(format!("{} contains '..' which is not allowed", component_type))
    } else if component.contains('#') || component.contains('?') {
        Some(format!("{} contains URL-unsafe characters", component_type))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ReportError::SecurityError {
            input: component.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path doesn't exist, is a symbolic link, is not a
/// regular file or exceeds `max_size` bytes.
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}
