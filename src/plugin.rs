//! Plugin lifecycle and the resolution table.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::external::BuildOptions;
use crate::loader;
use crate::source::MapSource;

/// Name the plugin registers under with the host bundler.
pub const PLUGIN_NAME: &str = "import-remap";

/// A resolution answer handed back to the host.
///
/// Mapped targets are always returned non-external, regardless of the
/// target's own prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedId {
    /// The redirection target
    pub id: String,
    /// Whether the host should leave the target un-bundled
    pub external: bool,
}

/// Import map plugin for a bundler's module-resolution pipeline.
///
/// Construct it with the mapping sources, run [`build_start`] once per build
/// before resolution begins, then answer each resolution request through
/// [`resolve_id`].
///
/// [`build_start`]: Self::build_start
/// [`resolve_id`]: Self::resolve_id
#[derive(Debug, Default)]
pub struct ImportRemapPlugin {
    sources: Vec<MapSource>,
    mappings: BTreeMap<String, String>,
}

impl ImportRemapPlugin {
    /// Create a plugin over one or more mapping sources.
    ///
    /// Sources are loaded in the given order; later sources override
    /// earlier ones for duplicate specifiers.
    pub fn new<S: Into<MapSource>>(sources: impl IntoIterator<Item = S>) -> Self {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            mappings: BTreeMap::new(),
        }
    }

    /// The plugin's registration name.
    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Build-start hook: load every source and populate the table.
    ///
    /// All sources load concurrently; the first failure aborts the hook and
    /// leaves this call's entries unmerged. On success, each source's
    /// entries are merged in configured order, last write winning.
    pub async fn build_start(&mut self, options: &BuildOptions) -> Result<()> {
        let entry_lists = loader::load_sources(&self.sources, &options.external).await?;

        for entries in entry_lists {
            for entry in entries {
                self.mappings.insert(entry.key, entry.value);
            }
        }

        info!(
            "Import map ready: {} specifiers from {} sources",
            self.mappings.len(),
            self.sources.len()
        );
        Ok(())
    }

    /// Resolution hook: answer one specifier-resolution request.
    ///
    /// Returns `None` for unmapped specifiers, deferring to the host's
    /// default resolution chain.
    pub fn resolve_id(&self, specifier: &str) -> Option<ResolvedId> {
        self.mappings.get(specifier).map(|target| {
            debug!("Redirecting {} to {}", specifier, target);
            ResolvedId {
                id: target.clone(),
                external: false,
            }
        })
    }

    /// Number of specifiers currently in the table.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
