//! Per-repository term and statement construction
//!
//! A [`ValueFactory`] is handed out by a repository and used to build the
//! terms that flow into bindings and query text. Blank node ids are drawn
//! from a monotonic counter so each factory produces distinct ids.

use crate::value::{BNode, Literal, Uri, Value};
use quarry_vocab::xsd;
use std::sync::atomic::{AtomicU64, Ordering};

/// A subject-predicate-object statement, with an optional context graph
///
/// Produced by graph queries and by [`ValueFactory::create_statement`].
/// The subject is a [`Value`] but must be a resource (URI or blank node).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    subject: Value,
    predicate: Uri,
    object: Value,
    context: Option<Uri>,
}

impl Statement {
    /// Create a statement in the default graph
    pub fn new(subject: Value, predicate: Uri, object: Value) -> Self {
        Statement {
            subject,
            predicate,
            object,
            context: None,
        }
    }

    /// Create a statement in a named graph
    pub fn with_context(subject: Value, predicate: Uri, object: Value, context: Uri) -> Self {
        Statement {
            subject,
            predicate,
            object,
            context: Some(context),
        }
    }

    /// Statement subject (URI or blank node)
    pub fn subject(&self) -> &Value {
        &self.subject
    }

    /// Statement predicate
    pub fn predicate(&self) -> &Uri {
        &self.predicate
    }

    /// Statement object
    pub fn object(&self) -> &Value {
        &self.object
    }

    /// Named graph this statement belongs to, if any
    pub fn context(&self) -> Option<&Uri> {
        self.context.as_ref()
    }
}

/// Factory for terms bound to one repository
///
/// Construction is infallible; lexical validity of literal labels is the
/// server's concern, the factory only fixes datatypes.
#[derive(Debug, Default)]
pub struct ValueFactory {
    bnode_counter: AtomicU64,
}

impl ValueFactory {
    /// Create a new factory with a fresh blank node counter
    pub fn new() -> Self {
        ValueFactory::default()
    }

    /// Create a URI from a full string form
    pub fn create_uri(&self, uri: &str) -> Uri {
        Uri::new(uri)
    }

    /// Create a URI from a namespace and local name
    pub fn create_uri_from(&self, namespace: &str, local_name: &str) -> Uri {
        Uri::new(format!("{namespace}{local_name}"))
    }

    /// Create a plain literal
    pub fn create_literal(&self, label: &str) -> Literal {
        Literal::plain(label)
    }

    /// Create a typed literal
    pub fn create_typed_literal(&self, label: &str, datatype: Uri) -> Literal {
        Literal::typed(label, datatype)
    }

    /// Create a language-tagged literal
    pub fn create_lang_literal(&self, label: &str, language: &str) -> Literal {
        Literal::tagged(label, language)
    }

    /// Create an `xsd:long` literal
    pub fn create_long_literal(&self, value: i64) -> Literal {
        Literal::typed(value.to_string(), Uri::new(xsd::LONG))
    }

    /// Create an `xsd:int` literal
    pub fn create_int_literal(&self, value: i32) -> Literal {
        Literal::typed(value.to_string(), Uri::new(xsd::INT))
    }

    /// Create an `xsd:double` literal
    pub fn create_double_literal(&self, value: f64) -> Literal {
        Literal::typed(value.to_string(), Uri::new(xsd::DOUBLE))
    }

    /// Create an `xsd:boolean` literal
    pub fn create_boolean_literal(&self, value: bool) -> Literal {
        Literal::typed(value.to_string(), Uri::new(xsd::BOOLEAN))
    }

    /// Create an `xsd:date` literal from a `YYYY-MM-DD` lexical form
    pub fn create_date_literal(&self, lexical: &str) -> Literal {
        Literal::typed(lexical, Uri::new(xsd::DATE))
    }

    /// Create an `xsd:dateTime` literal from an ISO-8601 lexical form
    pub fn create_datetime_literal(&self, lexical: &str) -> Literal {
        Literal::typed(lexical, Uri::new(xsd::DATE_TIME))
    }

    /// Create a blank node with a factory-unique id
    pub fn create_bnode(&self) -> BNode {
        let n = self.bnode_counter.fetch_add(1, Ordering::Relaxed);
        BNode::new(format!("b{n}"))
    }

    /// Create a blank node with an explicit id
    pub fn create_bnode_with_id(&self, id: &str) -> BNode {
        BNode::new(id)
    }

    /// Create a statement in the default graph
    pub fn create_statement(
        &self,
        subject: impl Into<Value>,
        predicate: Uri,
        object: impl Into<Value>,
    ) -> Statement {
        Statement::new(subject.into(), predicate, object.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_literal_constructors_fix_datatypes() {
        let vf = ValueFactory::new();
        assert_eq!(
            vf.create_long_literal(7).datatype().unwrap().as_str(),
            xsd::LONG
        );
        assert_eq!(
            vf.create_boolean_literal(true).label(),
            "true"
        );
        assert_eq!(
            vf.create_date_literal("2024-01-31").datatype().unwrap().as_str(),
            xsd::DATE
        );
    }

    #[test]
    fn bnode_ids_are_unique_per_factory() {
        let vf = ValueFactory::new();
        let a = vf.create_bnode();
        let b = vf.create_bnode();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn statement_accessors() {
        let vf = ValueFactory::new();
        let s = vf.create_statement(
            vf.create_uri("http://example.org/s"),
            vf.create_uri("http://example.org/p"),
            vf.create_literal("o"),
        );
        assert_eq!(s.predicate().local_name(), "p");
        assert!(s.context().is_none());
    }
}
