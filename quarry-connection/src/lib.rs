//! # Quarry Connection
//!
//! Client session layer for a remote triple store: repositories,
//! connections, and prepared queries.
//!
//! The object graph is small and strictly layered:
//! - [`StoreSpec`] names a database and its creation parameters, with
//!   schema-validated options
//! - [`Repository`] owns the transport handle, the query-language registry,
//!   and the datatype-mapping tables, and walks the
//!   `Uninitialized → Initialized → ShutDown` lifecycle
//! - [`Connection`] is one closable query/update session over a repository
//! - [`TupleQuery`], [`GraphQuery`], and [`BooleanQuery`] are prepared
//!   queries, one per result shape
//!
//! ## Design Principles
//!
//! 1. **Fail at the boundary**: option keys, option value kinds, access
//!    verbs, and query languages are validated where they enter, with
//!    messages that name the offending input and the legal set
//! 2. **Lifecycle is terminal**: shutdown drops the transport handle and
//!    cannot be undone; closed connections reject every operation
//! 3. **Loud gaps**: declared-but-unavailable features return
//!    [`StoreError::Unimplemented`], never a silent wrong answer
//!
//! ## Example
//!
//! ```
//! use quarry_connection::{memory_repository, AccessVerb, StoreSpec};
//!
//! # fn main() -> quarry_connection::Result<()> {
//! let repo = memory_repository(StoreSpec::new(AccessVerb::Renew, "kennedy"));
//! repo.initialize()?;
//!
//! let conn = repo.get_connection()?;
//! let sparql = repo.query_languages().sparql();
//! let query = conn.prepare_tuple_query(&sparql, "SELECT ?s WHERE { ?s ?p ?o }", None)?;
//! for row in query.evaluate()? {
//!     println!("{:?}", row.get(0));
//! }
//!
//! repo.shut_down();
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod datatypes;
pub mod error;
pub mod options;
pub mod query;
pub mod repository;
pub mod store;

pub use connection::Connection;
pub use datatypes::NativeType;
pub use error::{Result, StoreError};
pub use options::{OptionKind, OptionValue, StoreOptions};
pub use query::{BooleanQuery, GraphQuery, GraphQueryResult, QuerySpec, TupleQuery};
pub use repository::Repository;
pub use store::{AccessVerb, StoreSpec, DEFAULT_PORT};

use quarry_protocol::MemoryTransport;
use std::sync::Arc;

/// Build a repository over an in-memory transport
///
/// The returned repository performs no I/O; query calls answer with empty
/// responses unless the transport is configured with canned data. Intended
/// for tests and examples.
pub fn memory_repository(spec: StoreSpec) -> Arc<Repository> {
    Arc::new(Repository::new(spec, Arc::new(MemoryTransport::new())))
}
