//! Concurrent loading of import map sources.

use std::path::{Component, Path, PathBuf};

use futures::future;
use tokio::fs;
use tracing::debug;

use crate::error::{ImportMapError, Result};
use crate::external::ExternalSpecifiers;
use crate::source::{ImportMapDocument, MapSource, SourceFormat};
use crate::validate::{MappingEntry, validate};

/// Load and validate every configured source.
///
/// All sources are awaited together; the result is one entry list per
/// source, in the configured order, or the first error to occur. A single
/// failing source fails the whole load.
pub async fn load_sources(
    sources: &[MapSource],
    external: &ExternalSpecifiers,
) -> Result<Vec<Vec<MappingEntry>>> {
    let loads = sources.iter().map(|source| load_source(source, external));
    future::try_join_all(loads).await
}

/// Load and validate a single source.
async fn load_source(
    source: &MapSource,
    external: &ExternalSpecifiers,
) -> Result<Vec<MappingEntry>> {
    match source {
        MapSource::Inline(doc) => validate(doc, external),
        MapSource::Path(path) => {
            let path = normalize_path(path);
            let format = SourceFormat::from_path(&path)
                .ok_or_else(|| ImportMapError::UnsupportedFormat(path.clone()))?;

            let text = fs::read_to_string(&path).await?;
            let doc: ImportMapDocument = match format {
                SourceFormat::Yaml => serde_yaml::from_str(&text)?,
                SourceFormat::Json => serde_json::from_str(&text)?,
            };

            let entries = validate(&doc, external)?;
            debug!("Loaded {} mappings from {}", entries.len(), path.display());
            Ok(entries)
        }
    }
}

/// Lexically resolve `.` and `..` segments without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep leading ".." segments of relative paths
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}
