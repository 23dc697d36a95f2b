pub mod dependency_index;
pub mod license_id_normalizer;

pub use dependency_index::DependencyIndex;
pub use license_id_normalizer::LicenseIdNormalizer;
