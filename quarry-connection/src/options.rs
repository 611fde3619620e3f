//! Store-creation options and their schema
//!
//! Every option a store accepts is declared up front in a constant schema
//! table: its key, the kind of value it takes, and the operation name the
//! server knows it by. Validation happens at construction time, before any
//! network interaction; a single bad key or mismatched kind aborts with an
//! error naming the problem and the legal set.

use crate::error::{Result, StoreError};
use num_bigint::BigInt;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Expected number of unique resources (unbounded integer)
pub const EXPECTED_UNIQUE_RESOURCES: &str = "EXPECTED_UNIQUE_RESOURCES";

/// Index flavors to build at creation time (list of strings)
pub const WITH_INDICES: &str = "WITH_INDICES";

/// Whether to preload the standard vocabulary parts (boolean)
pub const INCLUDE_STANDARD_PARTS: &str = "INCLUDE_STANDARD_PARTS";

/// Open the store read-only (boolean)
pub const READ_ONLY: &str = "READ_ONLY";

/// Host to relay the session through (string)
pub const INDIRECT_HOST: &str = "INDIRECT_HOST";

/// Port to relay the session through (integer)
pub const INDIRECT_PORT: &str = "INDIRECT_PORT";

/// The kind of value an option accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` / `false`
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// Arbitrary-precision non-negative integer
    UnboundedInteger,
    /// Plain string
    String,
    /// List of strings
    List,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptionKind::Boolean => "boolean",
            OptionKind::Integer => "integer",
            OptionKind::UnboundedInteger => "unbounded integer",
            OptionKind::String => "string",
            OptionKind::List => "list",
        })
    }
}

/// A typed option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Boolean value
    Boolean(bool),
    /// 64-bit integer value
    Integer(i64),
    /// Arbitrary-precision integer value
    UnboundedInteger(BigInt),
    /// String value
    String(String),
    /// List of strings
    List(Vec<String>),
}

impl OptionValue {
    /// The kind this value belongs to
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Boolean(_) => OptionKind::Boolean,
            OptionValue::Integer(_) => OptionKind::Integer,
            OptionValue::UnboundedInteger(_) => OptionKind::UnboundedInteger,
            OptionValue::String(_) => OptionKind::String,
            OptionValue::List(_) => OptionKind::List,
        }
    }

    /// Coerce this value to the declared kind, if compatible
    ///
    /// The only widening allowed is a plain integer where an unbounded
    /// integer is declared; everything else must match exactly.
    fn coerce_to(self, kind: OptionKind) -> Option<OptionValue> {
        match (kind, self) {
            (OptionKind::UnboundedInteger, OptionValue::Integer(n)) => {
                Some(OptionValue::UnboundedInteger(BigInt::from(n)))
            }
            (kind, value) if value.kind() == kind => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Boolean(b) => write!(f, "{b}"),
            OptionValue::Integer(n) => write!(f, "{n}"),
            OptionValue::UnboundedInteger(n) => write!(f, "{n}"),
            OptionValue::String(s) => f.write_str(s),
            OptionValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Boolean(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Integer(n)
    }
}

impl From<BigInt> for OptionValue {
    fn from(n: BigInt) -> Self {
        OptionValue::UnboundedInteger(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::List(items)
    }
}

/// One row of the option schema
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Client-facing option key
    pub key: &'static str,
    /// Kind of value the option accepts
    pub kind: OptionKind,
    /// Operation name the server knows this option by
    pub server_op: &'static str,
}

/// The complete schema of legal store-creation options
pub const STORE_OPTION_SCHEMA: &[OptionSpec] = &[
    OptionSpec {
        key: EXPECTED_UNIQUE_RESOURCES,
        kind: OptionKind::UnboundedInteger,
        server_op: "expected-unique-resources",
    },
    OptionSpec {
        key: WITH_INDICES,
        kind: OptionKind::List,
        server_op: "with-indices",
    },
    OptionSpec {
        key: INCLUDE_STANDARD_PARTS,
        kind: OptionKind::Boolean,
        server_op: "include-standard-parts",
    },
    OptionSpec {
        key: READ_ONLY,
        kind: OptionKind::Boolean,
        server_op: "read-only-p",
    },
    OptionSpec {
        key: INDIRECT_HOST,
        kind: OptionKind::String,
        server_op: "indirect-host",
    },
    OptionSpec {
        key: INDIRECT_PORT,
        kind: OptionKind::Integer,
        server_op: "indirect-port",
    },
];

fn spec_for(key: &str) -> Option<&'static OptionSpec> {
    STORE_OPTION_SCHEMA.iter().find(|s| s.key == key)
}

fn legal_keys() -> String {
    STORE_OPTION_SCHEMA
        .iter()
        .map(|s| s.key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validated set of store-creation options
///
/// Immutable once handed to a store; every entry has passed schema
/// validation. Iteration order is stable (sorted by key).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreOptions {
    entries: BTreeMap<&'static str, OptionValue>,
}

impl StoreOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        StoreOptions::default()
    }

    /// Set an option, validating the key and the value's kind
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) -> Result<()> {
        let spec = spec_for(key).ok_or_else(|| {
            StoreError::illegal_option(format!(
                "Unrecognized option '{key}'. Legal options are: {}",
                legal_keys()
            ))
        })?;
        let value = value.into();
        let coerced = value.clone().coerce_to(spec.kind).ok_or_else(|| {
            StoreError::illegal_option(format!(
                "Invalid option '{key}={value}'. Expected a {} value",
                spec.kind
            ))
        })?;
        self.entries.insert(spec.key, coerced);
        Ok(())
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Parse an option map from JSON
    ///
    /// Accepts an object of `{KEY: value}` pairs; kinds are checked against
    /// the schema exactly as with typed construction.
    pub fn from_json(json: &JsonValue) -> Result<Self> {
        let obj = json.as_object().ok_or_else(|| {
            StoreError::illegal_option("Store options must be a JSON object")
        })?;

        let mut options = StoreOptions::new();
        for (key, value) in obj {
            options.set(key, json_to_option_value(key, value)?)?;
        }
        Ok(options)
    }

    /// The value set for `key`, if any
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// True when no options are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of options set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True exactly when `READ_ONLY` was set to `true`
    pub fn read_only(&self) -> bool {
        matches!(self.get(READ_ONLY), Some(OptionValue::Boolean(true)))
    }

    /// Entries translated to server operation names, for wire rendering
    pub fn server_op_entries(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let spec = spec_for(key).expect("schema-validated key");
                (spec.server_op, value.to_string())
            })
            .collect()
    }
}

/// Convert a JSON value to a typed option value
///
/// The JSON shape determines the kind; kind checking against the schema
/// happens in [`StoreOptions::set`].
fn json_to_option_value(key: &str, value: &JsonValue) -> Result<OptionValue> {
    match value {
        JsonValue::Bool(b) => Ok(OptionValue::Boolean(*b)),
        JsonValue::Number(n) => n
            .as_i64()
            .map(OptionValue::Integer)
            .or_else(|| n.as_u64().map(|u| OptionValue::UnboundedInteger(BigInt::from(u))))
            .ok_or_else(|| {
                StoreError::illegal_option(format!(
                    "Invalid option '{key}={n}'. Expected an integral number"
                ))
            }),
        JsonValue::String(s) => Ok(OptionValue::String(s.clone())),
        JsonValue::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                let s = item.as_str().ok_or_else(|| {
                    StoreError::illegal_option(format!(
                        "Invalid option '{key}': list entries must be strings"
                    ))
                })?;
                list.push(s.to_string());
            }
            Ok(OptionValue::List(list))
        }
        other => Err(StoreError::illegal_option(format!(
            "Invalid option '{key}={other}'. Expected a boolean, number, string, or list"
        ))),
    }
}
