//! The host bundler's external-specifier configuration.

use std::collections::HashSet;
use std::fmt;

/// Predicate form of the external config.
pub type ExternalPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// The host's "external" designation, consulted during validation.
///
/// Hosts express externals either as a predicate over specifiers or as a
/// plain list; both collapse into a single [`matches`](Self::matches) call.
#[derive(Default)]
pub enum ExternalSpecifiers {
    /// No external config supplied
    #[default]
    None,
    /// A predicate over specifiers
    Predicate(ExternalPredicate),
    /// An explicit set of specifiers
    Membership(HashSet<String>),
}

impl ExternalSpecifiers {
    /// Create a predicate-form config.
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        ExternalSpecifiers::Predicate(Box::new(f))
    }

    /// Create a membership-form config from a list of specifiers.
    pub fn list<S: Into<String>>(specifiers: impl IntoIterator<Item = S>) -> Self {
        ExternalSpecifiers::Membership(specifiers.into_iter().map(Into::into).collect())
    }

    /// Whether the host treats this specifier as external.
    pub fn matches(&self, specifier: &str) -> bool {
        match self {
            ExternalSpecifiers::None => false,
            ExternalSpecifiers::Predicate(f) => f(specifier),
            ExternalSpecifiers::Membership(set) => set.contains(specifier),
        }
    }
}

impl fmt::Debug for ExternalSpecifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalSpecifiers::None => f.write_str("None"),
            ExternalSpecifiers::Predicate(_) => f.write_str("Predicate(..)"),
            ExternalSpecifiers::Membership(set) => f.debug_tuple("Membership").field(set).finish(),
        }
    }
}

/// Build options handed to the plugin at build-start.
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Specifiers the host leaves un-bundled
    pub external: ExternalSpecifiers,
}

impl BuildOptions {
    /// Build options carrying an external config.
    pub fn with_external(external: ExternalSpecifiers) -> Self {
        Self { external }
    }
}
