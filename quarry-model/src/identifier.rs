//! Tagged union over URI objects and raw URI strings
//!
//! Registration calls (datatype mappings, free-text predicates) accept
//! either a [`Uri`] object or a plain string. Rather than sniffing the
//! argument shape at each call site, callers pass an [`Identifier`] and the
//! wire-ready form is produced in one place.

use crate::value::Uri;
use std::fmt;

/// A URI-valued argument, either as a term object or as a raw string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A URI term object
    Uri(Uri),
    /// A raw URI string, with or without surrounding angle brackets
    Raw(String),
}

impl Identifier {
    /// The bare URI string, with any surrounding angle brackets removed
    pub fn as_uri_str(&self) -> &str {
        match self {
            Identifier::Uri(u) => u.as_str(),
            Identifier::Raw(s) => s
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
                .unwrap_or(s),
        }
    }

    /// Wire-ready form with angle brackets, e.g. `<http://example.org/p>`
    pub fn to_wire_form(&self) -> String {
        format!("<{}>", self.as_uri_str())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_uri_str())
    }
}

impl From<Uri> for Identifier {
    fn from(u: Uri) -> Self {
        Identifier::Uri(u)
    }
}

impl From<&Uri> for Identifier {
    fn from(u: &Uri) -> Self {
        Identifier::Uri(u.clone())
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Raw(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Raw(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_from_uri_object() {
        let id: Identifier = Uri::new("http://example.org/p").into();
        assert_eq!(id.to_wire_form(), "<http://example.org/p>");
    }

    #[test]
    fn wire_form_from_raw_string() {
        let id: Identifier = "http://example.org/p".into();
        assert_eq!(id.to_wire_form(), "<http://example.org/p>");
    }

    #[test]
    fn wire_form_does_not_double_bracket() {
        let id: Identifier = "<http://example.org/p>".into();
        assert_eq!(id.as_uri_str(), "http://example.org/p");
        assert_eq!(id.to_wire_form(), "<http://example.org/p>");
    }
}
