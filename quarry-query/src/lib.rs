//! # Quarry Query
//!
//! Query-side value types for the Quarry session layer.
//!
//! This crate provides:
//! - [`QueryLanguage`] and the explicit [`QueryLanguageRegistry`] (no
//!   process-global state; a registry instance is owned by the repository)
//! - [`Bindings`]: named variable bindings attached to a query
//! - [`Dataset`]: default/named graph scope override for a query
//! - [`TupleQueryResult`]: lazy, column-named row stream adapted from a raw
//!   transport response
//!
//! The query *objects* (tuple/graph/boolean) live in `quarry-connection`,
//! next to the connection that dispatches them; this crate knows nothing
//! about transports or repositories.

pub mod bindings;
pub mod dataset;
pub mod language;
pub mod result;

pub use bindings::Bindings;
pub use dataset::Dataset;
pub use language::{QueryLanguage, QueryLanguageRegistry, PROLOG, SPARQL};
pub use result::{Row, TupleQueryResult};
