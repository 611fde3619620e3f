//! Query language values and the language registry
//!
//! The registry replaces the process-global mutable list found in older
//! clients: an instance is built once (normally by the repository) and
//! shared read-only by every connection derived from it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Well-known name of the SPARQL dialect
pub const SPARQL: &str = "SPARQL";

/// Well-known name of the Prolog dialect
pub const PROLOG: &str = "PROLOG";

/// An immutable value identifying a supported query dialect
///
/// Cheap to clone (`Arc`-backed name). Equality and hashing are
/// case-insensitive on the name, so a clone of a registered singleton
/// compares equal wherever it flows.
#[derive(Debug, Clone)]
pub struct QueryLanguage {
    name: Arc<str>,
}

impl QueryLanguage {
    fn new(name: impl Into<Arc<str>>) -> Self {
        QueryLanguage { name: name.into() }
    }

    /// The language name as registered
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for QueryLanguage {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for QueryLanguage {}

impl Hash for QueryLanguage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.name.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for QueryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Registry of supported query languages
///
/// Append-only: languages are registered during setup and never removed.
/// [`with_defaults`](Self::with_defaults) seeds the two well-known dialects,
/// `SPARQL` and `PROLOG`, which the session layer treats as the only
/// evaluable languages.
#[derive(Debug, Clone, Default)]
pub struct QueryLanguageRegistry {
    languages: Vec<QueryLanguage>,
}

impl QueryLanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        QueryLanguageRegistry::default()
    }

    /// Create a registry pre-seeded with `SPARQL` and `PROLOG`
    pub fn with_defaults() -> Self {
        let mut registry = QueryLanguageRegistry::new();
        registry.register(SPARQL);
        registry.register(PROLOG);
        registry
    }

    /// Register a language, returning its value
    ///
    /// Names are case-insensitively unique: registering an existing name
    /// returns the already-registered value instead of appending.
    pub fn register(&mut self, name: &str) -> QueryLanguage {
        if let Some(existing) = self.lookup(name) {
            return existing;
        }
        let language = QueryLanguage::new(name);
        self.languages.push(language.clone());
        language
    }

    /// Case-insensitive lookup; absent names return `None`, never an error
    pub fn lookup(&self, name: &str) -> Option<QueryLanguage> {
        self.languages
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Snapshot of every registered language, in registration order
    pub fn all(&self) -> &[QueryLanguage] {
        &self.languages
    }

    /// The pre-registered SPARQL singleton
    ///
    /// Panics only if called on a registry built without defaults.
    pub fn sparql(&self) -> QueryLanguage {
        self.lookup(SPARQL)
            .expect("SPARQL not registered; use QueryLanguageRegistry::with_defaults")
    }

    /// The pre-registered Prolog singleton
    pub fn prolog(&self) -> QueryLanguage {
        self.lookup(PROLOG)
            .expect("PROLOG not registered; use QueryLanguageRegistry::with_defaults")
    }
}
