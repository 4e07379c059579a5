//! import-remap - A bundler plugin that redirects import specifiers through
//! JSON/YAML import maps.
//!
//! Before a build starts, the plugin loads every configured map source
//! concurrently, validates each entry, and merges the results into one
//! resolution table. During the build, each specifier-resolution request is
//! a synchronous lookup: a hit redirects the specifier to its mapped target
//! (always non-external), a miss defers to the host's default resolution.
//!
//! ```no_run
//! use import_remap::{BuildOptions, ImportRemapPlugin};
//!
//! # async fn demo() -> import_remap::Result<()> {
//! let mut plugin = ImportRemapPlugin::new(["importmap.yaml"]);
//! plugin.build_start(&BuildOptions::default()).await?;
//!
//! if let Some(resolved) = plugin.resolve_id("leaflet") {
//!     assert!(!resolved.external);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod external;
pub mod loader;
pub mod plugin;
pub mod source;
pub mod validate;

pub use error::{ImportMapError, Result};
pub use external::{BuildOptions, ExternalSpecifiers};
pub use plugin::{ImportRemapPlugin, PLUGIN_NAME, ResolvedId};
pub use source::{ImportMapDocument, MapSource, SourceFormat};
pub use validate::MappingEntry;
