//! Import map sources and file-format detection.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A parsed import map document.
///
/// Both JSON and YAML sources deserialize into this shape. The `imports`
/// field is required; a document without it fails at parse time.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ImportMapDocument {
    /// Mapping from import specifier to replacement target, in document order
    pub imports: IndexMap<String, String>,
}

impl ImportMapDocument {
    /// Create a document from an iterable of specifier/target pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            imports: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A single configured mapping source.
#[derive(Debug, Clone)]
pub enum MapSource {
    /// An inline import map supplied directly at construction
    Inline(ImportMapDocument),
    /// A filesystem path to a JSON or YAML import map
    Path(PathBuf),
}

impl From<ImportMapDocument> for MapSource {
    fn from(doc: ImportMapDocument) -> Self {
        MapSource::Inline(doc)
    }
}

impl From<PathBuf> for MapSource {
    fn from(path: PathBuf) -> Self {
        MapSource::Path(path)
    }
}

impl From<&Path> for MapSource {
    fn from(path: &Path) -> Self {
        MapSource::Path(path.to_path_buf())
    }
}

impl From<&str> for MapSource {
    fn from(path: &str) -> Self {
        MapSource::Path(PathBuf::from(path))
    }
}

impl From<String> for MapSource {
    fn from(path: String) -> Self {
        MapSource::Path(PathBuf::from(path))
    }
}

/// Recognized on-disk document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

/// Extensions recognized as YAML documents.
const YAML_EXTS: [&str; 2] = [".yaml", ".yml"];

/// Extensions recognized as JSON documents.
const JSON_EXTS: [&str; 1] = [".json"];

impl SourceFormat {
    /// Detect the format of a path by case-insensitive suffix match.
    ///
    /// Returns `None` for unrecognized extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let lower = path.to_string_lossy().to_lowercase();

        if YAML_EXTS.iter().any(|ext| lower.ends_with(ext)) {
            Some(SourceFormat::Yaml)
        } else if JSON_EXTS.iter().any(|ext| lower.ends_with(ext)) {
            Some(SourceFormat::Json)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SourceFormat::from_path(Path::new("maps/imports.yaml")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("imports.yml")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("imports.json")),
            Some(SourceFormat::Json)
        );
    }

    #[test]
    fn test_format_detection_case_insensitive() {
        assert_eq!(
            SourceFormat::from_path(Path::new("imports.YAML")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("imports.Json")),
            Some(SourceFormat::Json)
        );
    }

    #[test]
    fn test_format_detection_unrecognized() {
        assert_eq!(SourceFormat::from_path(Path::new("imports.txt")), None);
        assert_eq!(SourceFormat::from_path(Path::new("imports")), None);
    }

    #[test]
    fn test_source_conversions() {
        assert!(matches!(MapSource::from("imports.json"), MapSource::Path(_)));
        assert!(matches!(
            MapSource::from(ImportMapDocument::default()),
            MapSource::Inline(_)
        ));
    }

    #[test]
    fn test_document_requires_imports_field() {
        let err = serde_json::from_str::<ImportMapDocument>("{}");
        assert!(err.is_err());
    }
}
