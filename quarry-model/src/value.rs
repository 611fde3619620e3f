//! Core RDF term types
//!
//! The object position of a statement (and every cell of a tuple result)
//! holds a [`Value`]: a URI reference, a literal, or a blank node.
//!
//! ## Rendering
//!
//! `Display` renders NTriples-style lexical forms:
//! - URIs as `<http://...>`
//! - literals as `"label"`, `"label"^^<datatype>` or `"label"@lang`
//! - blank nodes as `_:id`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A URI reference
///
/// Stored as a single `Arc<str>` so clones are cheap. Namespace/local-name
/// splitting is derived on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(Arc<str>);

impl Uri {
    /// Create a URI from its string form (no angle brackets)
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Uri(uri.into())
    }

    /// The URI string, without angle brackets
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wire-ready form with angle brackets, e.g. `<http://example.org/p>`
    pub fn to_wire_form(&self) -> String {
        format!("<{}>", self.0)
    }

    /// Split point between namespace and local name
    ///
    /// The split falls after the last `#` or `/` in the URI; a URI with
    /// neither has an empty namespace.
    fn split_point(&self) -> usize {
        self.0
            .rfind(['#', '/'])
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Namespace portion of the URI (up to and including the last `#` or `/`)
    pub fn namespace(&self) -> &str {
        &self.0[..self.split_point()]
    }

    /// Local-name portion of the URI (after the last `#` or `/`)
    pub fn local_name(&self) -> &str {
        &self.0[self.split_point()..]
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Uri::new(s)
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Uri::new(s)
    }
}

/// A literal value: lexical label plus optional datatype or language tag
///
/// A literal never carries both a datatype and a language tag; the typed
/// constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    label: Arc<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    datatype: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Arc<str>>,
}

impl Literal {
    /// Create a plain literal (no datatype, no language tag)
    pub fn plain(label: impl Into<Arc<str>>) -> Self {
        Literal {
            label: label.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a typed literal
    pub fn typed(label: impl Into<Arc<str>>, datatype: Uri) -> Self {
        Literal {
            label: label.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged literal
    pub fn tagged(label: impl Into<Arc<str>>, language: impl Into<Arc<str>>) -> Self {
        Literal {
            label: label.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    /// The lexical label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The datatype URI, if any
    pub fn datatype(&self) -> Option<&Uri> {
        self.datatype.as_ref()
    }

    /// The language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.label)?;
        if let Some(dt) = &self.datatype {
            write!(f, "^^{}", dt)?;
        } else if let Some(lang) = &self.language {
            write!(f, "@{}", lang)?;
        }
        Ok(())
    }
}

/// A blank node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BNode(Arc<str>);

impl BNode {
    /// Create a blank node with the given local id
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        BNode(id.into())
    }

    /// The blank node id, without the `_:` prefix
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Polymorphic RDF term
///
/// Every cell of a tuple-query row and every position of a statement holds
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// URI reference
    Uri(Uri),
    /// Literal value
    Literal(Literal),
    /// Blank node
    BNode(BNode),
}

impl Value {
    /// The URI, if this value is one
    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            Value::Uri(u) => Some(u),
            _ => None,
        }
    }

    /// The literal, if this value is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// The blank node, if this value is one
    pub fn as_bnode(&self) -> Option<&BNode> {
        match self {
            Value::BNode(b) => Some(b),
            _ => None,
        }
    }

    /// True when the value can appear in subject position (URI or blank node)
    pub fn is_resource(&self) -> bool {
        !matches!(self, Value::Literal(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uri(u) => u.fmt(f),
            Value::Literal(l) => l.fmt(f),
            Value::BNode(b) => b.fmt(f),
        }
    }
}

impl From<Uri> for Value {
    fn from(u: Uri) -> Self {
        Value::Uri(u)
    }
}

impl From<Literal> for Value {
    fn from(l: Literal) -> Self {
        Value::Literal(l)
    }
}

impl From<BNode> for Value {
    fn from(b: BNode) -> Self {
        Value::BNode(b)
    }
}
