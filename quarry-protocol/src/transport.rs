//! Transport trait and in-memory test implementation
//!
//! [`StoreTransport`] is the seam apps implement to reach a real store.
//! The trait is object-safe and synchronous; the session layer holds it as
//! `Arc<dyn StoreTransport>`.
//!
//! ## Implementations
//!
//! Apps provide their own implementations over their wire layer. This crate
//! ships only [`MemoryTransport`], which records every call and serves
//! canned responses.
//!
//! ## Example
//!
//! ```ignore
//! use quarry_protocol::{StoreTransport, QueryResponse, Result};
//!
//! struct HttpTransport { /* ... */ }
//!
//! impl StoreTransport for HttpTransport {
//!     fn eval_sparql_query(&self, text: &str) -> Result<QueryResponse> {
//!         // POST to the store's SPARQL endpoint, decode {names, values}
//!     }
//!     // ...
//! }
//! ```

use crate::error::Result;
use crate::response::QueryResponse;
use std::fmt::Debug;
use std::sync::Mutex;

/// Synchronous call/response contract with a remote triple store
///
/// Mapping registrations (`add_mapped_predicate`, `add_mapped_type`,
/// `register_free_text_predicate`) write shared server-side state; callers
/// must not assume they are reversible or that concurrent writers observe a
/// consistent order without a fence from the implementation.
pub trait StoreTransport: Debug + Send + Sync {
    /// Evaluate SPARQL query text, returning column names and row values
    fn eval_sparql_query(&self, text: &str) -> Result<QueryResponse>;

    /// Evaluate Prolog query text, returning column names and row values
    fn eval_prolog_query(&self, text: &str) -> Result<QueryResponse>;

    /// Tell the store to free-text-index object strings for a predicate
    ///
    /// `uri` is in wire form (`<...>`).
    fn register_free_text_predicate(&self, uri: &str) -> Result<()>;

    /// Register an inlined-encoding mapping for objects of a predicate
    ///
    /// `uri` is in wire form; `native_tag` is one of the store's native
    /// encoding tags (`int`, `float`, `date-time`).
    fn add_mapped_predicate(&self, uri: &str, native_tag: &str) -> Result<()>;

    /// Register an inlined-encoding mapping for literals of a datatype
    ///
    /// `uri` is in wire form; `native_tag` as for [`add_mapped_predicate`].
    ///
    /// [`add_mapped_predicate`]: StoreTransport::add_mapped_predicate
    fn add_mapped_type(&self, uri: &str, native_tag: &str) -> Result<()>;

    /// List the predicates registered for free-text indexing
    fn list_free_text_predicates(&self) -> Result<Vec<String>>;
}

/// One recorded transport call
///
/// Used by tests to assert exactly-once dispatch and argument rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    /// `eval_sparql_query` with the query text
    EvalSparql(String),
    /// `eval_prolog_query` with the query text
    EvalProlog(String),
    /// `register_free_text_predicate` with the wire-form URI
    RegisterFreeTextPredicate(String),
    /// `add_mapped_predicate` with wire-form URI and native tag
    AddMappedPredicate { uri: String, native_tag: String },
    /// `add_mapped_type` with wire-form URI and native tag
    AddMappedType { uri: String, native_tag: String },
    /// `list_free_text_predicates`
    ListFreeTextPredicates,
}

/// A simple in-memory transport for testing
///
/// Records every call in order (interior mutability, `&self` methods) and
/// answers query calls with configured responses. Query calls with no
/// configured response return an empty response rather than failing, so
/// lifecycle tests don't need canned data.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    calls: Mutex<Vec<TransportCall>>,
    sparql_response: Mutex<Option<QueryResponse>>,
    prolog_response: Mutex<Option<QueryResponse>>,
    free_text_predicates: Mutex<Vec<String>>,
}

impl MemoryTransport {
    /// Create a new transport with no canned responses
    pub fn new() -> Self {
        MemoryTransport::default()
    }

    /// Set the response served by `eval_sparql_query`
    pub fn set_sparql_response(&self, response: QueryResponse) {
        *self.sparql_response.lock().expect("Mutex poisoned") = Some(response);
    }

    /// Set the response served by `eval_prolog_query`
    pub fn set_prolog_response(&self, response: QueryResponse) {
        *self.prolog_response.lock().expect("Mutex poisoned") = Some(response);
    }

    /// Builder-style variant of [`set_sparql_response`](Self::set_sparql_response)
    pub fn with_sparql_response(self, response: QueryResponse) -> Self {
        self.set_sparql_response(response);
        self
    }

    /// Builder-style variant of [`set_prolog_response`](Self::set_prolog_response)
    pub fn with_prolog_response(self, response: QueryResponse) -> Self {
        self.set_prolog_response(response);
        self
    }

    /// Snapshot of all recorded calls, in order
    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().expect("Mutex poisoned").clone()
    }

    /// Total number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("Mutex poisoned").len()
    }

    fn record(&self, call: TransportCall) {
        self.calls.lock().expect("Mutex poisoned").push(call);
    }
}

impl StoreTransport for MemoryTransport {
    fn eval_sparql_query(&self, text: &str) -> Result<QueryResponse> {
        self.record(TransportCall::EvalSparql(text.to_string()));
        Ok(self
            .sparql_response
            .lock()
            .expect("Mutex poisoned")
            .clone()
            .unwrap_or_else(QueryResponse::empty))
    }

    fn eval_prolog_query(&self, text: &str) -> Result<QueryResponse> {
        self.record(TransportCall::EvalProlog(text.to_string()));
        Ok(self
            .prolog_response
            .lock()
            .expect("Mutex poisoned")
            .clone()
            .unwrap_or_else(QueryResponse::empty))
    }

    fn register_free_text_predicate(&self, uri: &str) -> Result<()> {
        self.record(TransportCall::RegisterFreeTextPredicate(uri.to_string()));
        self.free_text_predicates
            .lock()
            .expect("Mutex poisoned")
            .push(uri.to_string());
        Ok(())
    }

    fn add_mapped_predicate(&self, uri: &str, native_tag: &str) -> Result<()> {
        self.record(TransportCall::AddMappedPredicate {
            uri: uri.to_string(),
            native_tag: native_tag.to_string(),
        });
        Ok(())
    }

    fn add_mapped_type(&self, uri: &str, native_tag: &str) -> Result<()> {
        self.record(TransportCall::AddMappedType {
            uri: uri.to_string(),
            native_tag: native_tag.to_string(),
        });
        Ok(())
    }

    fn list_free_text_predicates(&self) -> Result<Vec<String>> {
        self.record(TransportCall::ListFreeTextPredicates);
        Ok(self
            .free_text_predicates
            .lock()
            .expect("Mutex poisoned")
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_model::{Uri, Value};

    #[test]
    fn records_calls_in_order() {
        let t = MemoryTransport::new();
        t.eval_sparql_query("SELECT * WHERE { ?s ?p ?o }").unwrap();
        t.add_mapped_type("<http://example.org/dt>", "int").unwrap();

        let calls = t.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], TransportCall::EvalSparql(_)));
        assert_eq!(
            calls[1],
            TransportCall::AddMappedType {
                uri: "<http://example.org/dt>".into(),
                native_tag: "int".into()
            }
        );
    }

    #[test]
    fn serves_canned_sparql_response() {
        let t = MemoryTransport::new().with_sparql_response(QueryResponse::new(
            vec!["s".into()],
            vec![vec![Value::Uri(Uri::new("http://example.org/s"))]],
        ));
        let resp = t.eval_sparql_query("SELECT ?s WHERE { ?s ?p ?o }").unwrap();
        assert_eq!(resp.row_count(), 1);
    }

    #[test]
    fn unconfigured_query_returns_empty() {
        let t = MemoryTransport::new();
        let resp = t.eval_prolog_query("(select (?s) ...)").unwrap();
        assert_eq!(resp.row_count(), 0);
    }

    #[test]
    fn free_text_predicates_round_trip() {
        let t = MemoryTransport::new();
        t.register_free_text_predicate("<http://example.org/name>")
            .unwrap();
        assert_eq!(
            t.list_free_text_predicates().unwrap(),
            vec!["<http://example.org/name>".to_string()]
        );
    }
}
