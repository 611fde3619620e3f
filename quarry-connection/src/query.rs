//! Prepared queries and their evaluation
//!
//! A prepared query pairs immutable construction-time state (dialect, text,
//! optional base URI) with mutable pre-evaluation state (bindings, dataset,
//! inference flag). Three result shapes exist: tuple streams, statement
//! streams, and a single boolean. Only tuple evaluation reaches the server
//! today; the other shapes fail loudly rather than return a wrong answer.

use crate::connection::Connection;
use crate::error::{Result, StoreError};
use quarry_model::{Statement, Value};
use quarry_query::{
    Bindings, Dataset, QueryLanguage, QueryLanguageRegistry, TupleQueryResult, PROLOG, SPARQL,
};
use tracing::debug;

/// State shared by every prepared query shape
#[derive(Debug, Clone)]
pub struct QuerySpec {
    language: QueryLanguage,
    text: String,
    base_uri: Option<String>,
    include_inferred: bool,
    bindings: Bindings,
    dataset: Option<Dataset>,
}

impl QuerySpec {
    /// Validate the dialect and capture the query text
    ///
    /// The dialect must be one of the registered evaluable languages;
    /// anything else is rejected here, at preparation time, not at
    /// evaluation time.
    pub(crate) fn new(
        registry: &QueryLanguageRegistry,
        language: &QueryLanguage,
        text: String,
        base_uri: Option<String>,
        include_inferred: bool,
    ) -> Result<Self> {
        let language = registry.lookup(language.name()).ok_or_else(|| {
            StoreError::illegal_option(format!(
                "Unsupported query language '{language}'. Supported languages are {SPARQL} and {PROLOG}"
            ))
        })?;
        Ok(QuerySpec {
            language,
            text,
            base_uri,
            include_inferred,
            bindings: Bindings::new(),
            dataset: None,
        })
    }

    fn is_sparql(&self) -> bool {
        self.language.name().eq_ignore_ascii_case(SPARQL)
    }
}

// The three query shapes share their accessor surface verbatim.
macro_rules! query_accessors {
    () => {
        /// The dialect this query was prepared in
        pub fn language(&self) -> &QueryLanguage {
            &self.spec.language
        }

        /// The query text as prepared
        pub fn text(&self) -> &str {
            &self.spec.text
        }

        /// The base URI for resolving relative URIs in the text, if any
        pub fn base_uri(&self) -> Option<&str> {
            self.spec.base_uri.as_deref()
        }

        /// Whether evaluation reasons over inferred triples
        pub fn include_inferred(&self) -> bool {
            self.spec.include_inferred
        }

        /// Override the session default for including inferred triples
        pub fn set_include_inferred(&mut self, include_inferred: bool) {
            self.spec.include_inferred = include_inferred;
        }

        /// Bind a variable to a concrete value for the next evaluation
        ///
        /// Rebinding a bound name overwrites the earlier value.
        pub fn set_binding(&mut self, name: impl Into<String>, value: Value) {
            self.spec.bindings.add_binding(name, value);
        }

        /// Remove a variable binding; unbinding an unbound name is a no-op
        pub fn remove_binding(&mut self, name: &str) {
            self.spec.bindings.remove_binding(name);
        }

        /// The variable bindings currently attached
        pub fn bindings(&self) -> &Bindings {
            &self.spec.bindings
        }

        /// Restrict evaluation to an explicit dataset
        pub fn set_dataset(&mut self, dataset: Dataset) {
            self.spec.dataset = Some(dataset);
        }

        /// The attached dataset, if any
        pub fn dataset(&self) -> Option<&Dataset> {
            self.spec.dataset.as_ref()
        }
    };
}

/// A prepared query answering with a stream of variable-binding tuples
#[derive(Debug)]
pub struct TupleQuery<'a> {
    connection: &'a Connection,
    spec: QuerySpec,
}

impl<'a> TupleQuery<'a> {
    pub(crate) fn new(connection: &'a Connection, spec: QuerySpec) -> Self {
        TupleQuery { connection, spec }
    }

    query_accessors!();

    /// Evaluate the query, returning a single-pass row stream
    ///
    /// Dataset-restricted evaluation is not available yet and fails rather
    /// than silently querying the whole store.
    pub fn evaluate(&self) -> Result<TupleQueryResult> {
        if self.spec.dataset.is_some() {
            return Err(StoreError::unimplemented("query datasets"));
        }
        let transport = self.connection.transport()?;
        debug!(
            language = %self.spec.language,
            include_inferred = self.spec.include_inferred,
            "evaluating tuple query"
        );
        let response = if self.spec.is_sparql() {
            transport.eval_sparql_query(&self.spec.text)?
        } else {
            transport.eval_prolog_query(&self.spec.text)?
        };
        Ok(TupleQueryResult::new(response.names, response.values))
    }

    /// Evaluate into the compact column-oriented form
    pub fn evaluate_compact(&self) -> Result<TupleQueryResult> {
        Err(StoreError::unimplemented("compact tuple form"))
    }
}

/// Statement stream answering a graph query
///
/// A materialized, non-restartable iterator; collect it to traverse the
/// statements more than once.
pub type GraphQueryResult = std::vec::IntoIter<Statement>;

/// A prepared query answering with a stream of statements
#[derive(Debug)]
pub struct GraphQuery<'a> {
    connection: &'a Connection,
    spec: QuerySpec,
}

impl<'a> GraphQuery<'a> {
    pub(crate) fn new(connection: &'a Connection, spec: QuerySpec) -> Self {
        GraphQuery { connection, spec }
    }

    query_accessors!();

    /// Evaluate the query, returning a stream of statements
    pub fn evaluate(&self) -> Result<GraphQueryResult> {
        self.connection.ensure_open()?;
        Err(StoreError::unimplemented("graph query evaluation"))
    }
}

/// A prepared query answering with a single boolean
#[derive(Debug)]
pub struct BooleanQuery<'a> {
    connection: &'a Connection,
    spec: QuerySpec,
}

impl<'a> BooleanQuery<'a> {
    pub(crate) fn new(connection: &'a Connection, spec: QuerySpec) -> Self {
        BooleanQuery { connection, spec }
    }

    query_accessors!();

    /// Evaluate the query, returning its truth value
    pub fn evaluate(&self) -> Result<bool> {
        self.connection.ensure_open()?;
        Err(StoreError::unimplemented("boolean query evaluation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use crate::store::{AccessVerb, StoreSpec};
    use quarry_model::{Literal, Uri};
    use quarry_protocol::{MemoryTransport, QueryResponse, StoreTransport, TransportCall};
    use std::sync::Arc;

    fn session() -> (Arc<Repository>, Arc<MemoryTransport>) {
        let transport = Arc::new(MemoryTransport::new());
        let repo = Arc::new(Repository::new(
            StoreSpec::new(AccessVerb::Open, "kennedy"),
            transport.clone() as Arc<dyn StoreTransport>,
        ));
        repo.initialize().unwrap();
        (repo, transport)
    }

    fn sample_response() -> QueryResponse {
        QueryResponse::new(
            vec!["s".into(), "p".into(), "o".into()],
            vec![vec![
                Value::Uri(Uri::new("http://example.org/a")),
                Value::Uri(Uri::new("http://example.org/b")),
                Value::Literal(Literal::plain("c")),
            ]],
        )
    }

    #[test]
    fn unsupported_language_is_rejected_at_preparation() {
        let (repo, _) = session();
        let conn = repo.get_connection().unwrap();
        let mut other = QueryLanguageRegistry::new();
        let serql = other.register("SeRQL");
        let err = conn
            .prepare_tuple_query(&serql, "SELECT s FROM {s} p {o}", None)
            .unwrap_err();
        assert!(matches!(err, StoreError::IllegalOption(_)));
        let msg = err.to_string();
        assert!(msg.contains("SeRQL"));
        assert!(msg.contains("SPARQL"));
        assert!(msg.contains("PROLOG"));
    }

    #[test]
    fn sparql_evaluation_routes_and_streams_rows() {
        let (repo, transport) = session();
        transport.set_sparql_response(sample_response());
        let conn = repo.get_connection().unwrap();
        let sparql = repo.query_languages().sparql();
        let query = conn
            .prepare_tuple_query(&sparql, "SELECT ?s ?p ?o WHERE { ?s ?p ?o }", None)
            .unwrap();

        let mut result = query.evaluate().unwrap();
        assert_eq!(result.binding_names(), ["s", "p", "o"]);
        let row = result.next().unwrap();
        assert_eq!(row.value("o").unwrap().as_literal().unwrap().label(), "c");
        assert!(result.next().is_none());

        assert!(matches!(transport.calls()[0], TransportCall::EvalSparql(_)));
    }

    #[test]
    fn prolog_evaluation_routes_to_prolog_endpoint() {
        let (repo, transport) = session();
        transport.set_prolog_response(sample_response());
        let conn = repo.get_connection().unwrap();
        let prolog = repo.query_languages().prolog();
        let query = conn
            .prepare_tuple_query(&prolog, "(select (?s) (q- ?s !ex:p ?o))", None)
            .unwrap();

        let result = query.evaluate().unwrap();
        assert_eq!(result.remaining(), 1);
        assert!(matches!(transport.calls()[0], TransportCall::EvalProlog(_)));
    }

    #[test]
    fn dataset_restriction_is_rejected_for_both_languages() {
        let (repo, transport) = session();
        let conn = repo.get_connection().unwrap();
        for language in [repo.query_languages().sparql(), repo.query_languages().prolog()] {
            let mut query = conn
                .prepare_tuple_query(&language, "SELECT ?s WHERE { ?s ?p ?o }", None)
                .unwrap();
            let mut dataset = Dataset::new();
            dataset.add_default_graph(Uri::new("http://example.org/graph"));
            query.set_dataset(dataset);
            let err = query.evaluate().unwrap_err();
            assert!(matches!(err, StoreError::Unimplemented(_)));
        }
        // The server was never reached.
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn bindings_overwrite_and_unbind_quietly() {
        let (repo, _) = session();
        let conn = repo.get_connection().unwrap();
        let sparql = repo.query_languages().sparql();
        let mut query = conn
            .prepare_tuple_query(&sparql, "SELECT ?s WHERE { ?s ?p ?o }", None)
            .unwrap();

        query.set_binding("s", Value::Uri(Uri::new("http://example.org/a")));
        query.set_binding("s", Value::Uri(Uri::new("http://example.org/b")));
        assert_eq!(
            query.bindings().get("s").unwrap().as_uri().unwrap().local_name(),
            "b"
        );
        query.remove_binding("never-bound");
        query.remove_binding("s");
        assert!(query.bindings().is_empty());
    }

    #[test]
    fn graph_and_boolean_evaluation_fail_loudly() {
        let (repo, _) = session();
        let conn = repo.get_connection().unwrap();
        let sparql = repo.query_languages().sparql();

        let graph = conn
            .prepare_graph_query(&sparql, "CONSTRUCT { ?s ?p ?o } WHERE { ?s ?p ?o }", None)
            .unwrap();
        assert!(matches!(
            graph.evaluate().unwrap_err(),
            StoreError::Unimplemented(_)
        ));

        let boolean = conn
            .prepare_boolean_query(&sparql, "ASK { ?s ?p ?o }", None)
            .unwrap();
        assert!(matches!(
            boolean.evaluate().unwrap_err(),
            StoreError::Unimplemented(_)
        ));
    }

    #[test]
    fn compact_tuple_form_is_unimplemented() {
        let (repo, _) = session();
        let conn = repo.get_connection().unwrap();
        let sparql = repo.query_languages().sparql();
        let query = conn
            .prepare_tuple_query(&sparql, "SELECT ?s WHERE { ?s ?p ?o }", None)
            .unwrap();
        let err = query.evaluate_compact().unwrap_err();
        assert!(err.to_string().contains("compact tuple form"));
    }
}
