use crate::license_report::domain::LicenseRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Separators of a compound license expression; only space-delimited keywords split
static COMPOUND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" OR | AND ").expect("valid compound separator pattern"));

/// LicenseIdNormalizer service for splitting compound license ids
///
/// This service contains pure business logic. A record whose id reads
/// `"MIT OR Apache-2.0"` becomes one record per atomic id, each a full copy
/// of the original with only `id` replaced.
pub struct LicenseIdNormalizer;

impl LicenseIdNormalizer {
    /// Normalizes license records so every id is atomic
    ///
    /// Original order is preserved and the fragments of a compound record
    /// appear consecutively in split order.
    pub fn normalize(records: Vec<LicenseRecord>) -> Vec<LicenseRecord> {
        let mut normalized = Vec::with_capacity(records.len());

        for record in records {
            if Self::is_compound(&record.id) {
                normalized.extend(
                    Self::split(&record.id)
                        .into_iter()
                        .map(|atomic_id| record.with_id(atomic_id)),
                );
            } else {
                normalized.push(record);
            }
        }

        normalized
    }

    /// Whether a license id looks like a compound expression
    ///
    /// Unanchored, case-sensitive substring test: ids that merely contain the
    /// letters `OR` or `AND` (e.g. `"FORK"`) also qualify. Splitting such an id
    /// yields the id itself, so the record passes through unchanged.
    pub fn is_compound(license_id: &str) -> bool {
        license_id.contains("OR") || license_id.contains("AND")
    }

    /// Splits a license id on ` OR ` / ` AND `
    pub fn split(license_id: &str) -> Vec<&str> {
        COMPOUND_SEPARATOR.split(license_id).collect()
    }
}
