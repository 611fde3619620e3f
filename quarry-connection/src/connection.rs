//! Query sessions over a repository
//!
//! A [`Connection`] is one session for querying and updating a repository.
//! Sessions are single-owner and must be closed on every exit path; a
//! closed session rejects every operation. The session also carries the
//! per-session default for reasoning over inferred triples, which seeds
//! every query prepared through it.

use crate::error::{Result, StoreError};
use crate::query::{BooleanQuery, GraphQuery, QuerySpec, TupleQuery};
use crate::repository::Repository;
use quarry_model::ValueFactory;
use quarry_protocol::StoreTransport;
use quarry_query::QueryLanguage;
use std::sync::Arc;
use tracing::debug;

/// One query/update session against a repository
///
/// Dropping a connection closes it; explicit [`close`](Connection::close)
/// is preferred so the point of release is visible in the calling code.
#[derive(Debug)]
pub struct Connection {
    repository: Arc<Repository>,
    include_inferred_default: bool,
    closed: bool,
}

impl Connection {
    pub(crate) fn new(repository: Arc<Repository>) -> Self {
        Connection {
            repository,
            // Queries reason over inferred triples unless told otherwise.
            include_inferred_default: true,
            closed: false,
        }
    }

    /// The repository this session belongs to
    pub fn repository(&self) -> &Arc<Repository> {
        &self.repository
    }

    /// The value factory of the underlying repository
    pub fn value_factory(&self) -> &ValueFactory {
        self.repository.value_factory()
    }

    /// Whether queries prepared on this session include inferred triples
    /// by default
    pub fn include_inferred_default(&self) -> bool {
        self.include_inferred_default
    }

    /// Change the session-wide default for including inferred triples
    ///
    /// Affects queries prepared after the change; already-prepared queries
    /// keep the setting they were seeded with.
    pub fn set_include_inferred_default(&mut self, include_inferred: bool) {
        self.include_inferred_default = include_inferred;
    }

    /// Whether this session has been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the session and release its resources
    ///
    /// Idempotent. The repository itself stays usable; only this session
    /// becomes unusable.
    pub fn close(&mut self) {
        if !self.closed {
            debug!(database = self.repository.database_name(), "closing connection");
            self.closed = true;
        }
    }

    /// Prepare a query whose answer is a stream of variable-binding tuples
    pub fn prepare_tuple_query(
        &self,
        language: &QueryLanguage,
        text: impl Into<String>,
        base_uri: Option<&str>,
    ) -> Result<TupleQuery<'_>> {
        Ok(TupleQuery::new(self, self.prepare(language, text, base_uri)?))
    }

    /// Prepare a query whose answer is a stream of statements
    pub fn prepare_graph_query(
        &self,
        language: &QueryLanguage,
        text: impl Into<String>,
        base_uri: Option<&str>,
    ) -> Result<GraphQuery<'_>> {
        Ok(GraphQuery::new(self, self.prepare(language, text, base_uri)?))
    }

    /// Prepare a query whose answer is a single boolean
    pub fn prepare_boolean_query(
        &self,
        language: &QueryLanguage,
        text: impl Into<String>,
        base_uri: Option<&str>,
    ) -> Result<BooleanQuery<'_>> {
        Ok(BooleanQuery::new(self, self.prepare(language, text, base_uri)?))
    }

    fn prepare(
        &self,
        language: &QueryLanguage,
        text: impl Into<String>,
        base_uri: Option<&str>,
    ) -> Result<QuerySpec> {
        self.ensure_open()?;
        QuerySpec::new(
            self.repository.query_languages(),
            language,
            text.into(),
            base_uri.map(str::to_string),
            self.include_inferred_default,
        )
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(StoreError::SessionClosed);
        }
        self.repository.ensure_initialized()
    }

    pub(crate) fn transport(&self) -> Result<Arc<dyn StoreTransport>> {
        self.ensure_open()?;
        self.repository.transport()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}
