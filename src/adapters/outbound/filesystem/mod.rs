/// Filesystem adapters for file I/O operations
mod license_text_reader;

pub use license_text_reader::FileSystemLicenseTextReader;
