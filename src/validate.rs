//! Validation of import map entries.

use crate::error::{ImportMapError, Result};
use crate::external::ExternalSpecifiers;
use crate::source::ImportMapDocument;

/// Prefixes a mapping target must start with to not be a bare import.
pub const ALLOWED_PREFIXES: [&str; 5] = ["/", "./", "../", "http://", "https://"];

/// Whether a target string is a bare import specifier.
fn is_bare(target: &str) -> bool {
    !ALLOWED_PREFIXES.iter().any(|pre| target.starts_with(pre))
}

/// A validated specifier-to-target pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// The import specifier being redirected
    pub key: String,
    /// The replacement target
    pub value: String,
}

/// Validate every entry of an import map document.
///
/// Entries are checked in document order and the first violation aborts
/// validation: a target must start with one of [`ALLOWED_PREFIXES`], and a
/// specifier must not also be declared external by the host.
pub fn validate(
    doc: &ImportMapDocument,
    external: &ExternalSpecifiers,
) -> Result<Vec<MappingEntry>> {
    doc.imports
        .iter()
        .map(|(key, value)| {
            if is_bare(value) {
                Err(ImportMapError::BareSpecifier {
                    key: key.clone(),
                    value: value.clone(),
                })
            } else if external.matches(key) {
                Err(ImportMapError::ExternalConflict)
            } else {
                Ok(MappingEntry {
                    key: key.clone(),
                    value: value.clone(),
                })
            }
        })
        .collect()
}
