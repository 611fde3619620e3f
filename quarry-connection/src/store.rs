//! Store identity and creation parameters
//!
//! A [`StoreSpec`] accumulates the parameters for attaching to a remote
//! database: the access verb, network location, database name, on-server
//! directory, and schema-validated creation options. The spec is immutable
//! once a repository is built over it.

use crate::error::{Result, StoreError};
use crate::options::StoreOptions;
use std::fmt;
use std::str::FromStr;

/// Default port a store listens on
pub const DEFAULT_PORT: u16 = 4567;

/// The mode used when attaching to a remote database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessVerb {
    /// Open the database if it exists, create it otherwise
    Renew,
    /// Attach to the database without claiming exclusive access
    Access,
    /// Open an existing database; fail if absent
    Open,
    /// Create a new database; fail if present
    Create,
    /// Create a new database, discarding any existing one
    Replace,
}

impl AccessVerb {
    /// The wire spelling of the verb
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessVerb::Renew => "RENEW",
            AccessVerb::Access => "ACCESS",
            AccessVerb::Open => "OPEN",
            AccessVerb::Create => "CREATE",
            AccessVerb::Replace => "REPLACE",
        }
    }
}

impl FromStr for AccessVerb {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RENEW" => Ok(AccessVerb::Renew),
            "ACCESS" => Ok(AccessVerb::Access),
            "OPEN" => Ok(AccessVerb::Open),
            "CREATE" => Ok(AccessVerb::Create),
            "REPLACE" => Ok(AccessVerb::Replace),
            other => Err(StoreError::illegal_option(format!(
                "Unknown access verb '{other}'. Legal verbs are RENEW, ACCESS, OPEN, CREATE, and REPLACE"
            ))),
        }
    }
}

impl fmt::Display for AccessVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and creation parameters for one remote database
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSpec {
    access_verb: AccessVerb,
    database_name: String,
    host: Option<String>,
    port: u16,
    directory: Option<String>,
    options: StoreOptions,
}

impl StoreSpec {
    /// Create a spec with the default port, no host/directory, no options
    pub fn new(access_verb: AccessVerb, database_name: impl Into<String>) -> Self {
        StoreSpec {
            access_verb,
            database_name: database_name.into(),
            host: None,
            port: DEFAULT_PORT,
            directory: None,
            options: StoreOptions::new(),
        }
    }

    /// Set the server host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the server port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the on-server database directory
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Attach schema-validated creation options
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// The access verb
    pub fn access_verb(&self) -> AccessVerb {
        self.access_verb
    }

    /// The remote database name
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// The server host, if set
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The on-server database directory, if set
    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    /// The creation options
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Whether data in the store can be changed
    ///
    /// The negation of the constructor-time `READ_ONLY` option; options are
    /// immutable after construction, so this never changes over the spec's
    /// lifetime.
    pub fn is_writable(&self) -> bool {
        !self.options.read_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::READ_ONLY;

    #[test]
    fn access_verb_round_trip() {
        for verb in [
            AccessVerb::Renew,
            AccessVerb::Access,
            AccessVerb::Open,
            AccessVerb::Create,
            AccessVerb::Replace,
        ] {
            assert_eq!(verb.as_str().parse::<AccessVerb>().unwrap(), verb);
        }
    }

    #[test]
    fn unknown_access_verb_names_legal_set() {
        let err = "ATTACH".parse::<AccessVerb>().unwrap_err();
        assert!(err.to_string().contains("RENEW"));
        assert!(err.to_string().contains("REPLACE"));
    }

    #[test]
    fn spec_defaults() {
        let spec = StoreSpec::new(AccessVerb::Open, "kennedy");
        assert_eq!(spec.port(), DEFAULT_PORT);
        assert!(spec.host().is_none());
        assert!(spec.options().is_empty());
        assert!(spec.is_writable());
    }

    #[test]
    fn writability_tracks_read_only_option() {
        let read_only = StoreOptions::new().with(READ_ONLY, true).unwrap();
        let spec = StoreSpec::new(AccessVerb::Open, "kennedy").with_options(read_only);
        assert!(!spec.is_writable());

        let writable = StoreOptions::new().with(READ_ONLY, false).unwrap();
        let spec = StoreSpec::new(AccessVerb::Open, "kennedy").with_options(writable);
        assert!(spec.is_writable());
    }
}
