//! # Quarry Model
//!
//! RDF value/term model for the Quarry client.
//!
//! This crate provides:
//! - Core term types: [`Uri`], [`Literal`], [`BNode`], and the [`Value`] union
//! - [`Identifier`]: a tagged union over URI objects and raw URI strings,
//!   with a single normalization step to the wire-ready `<...>` form
//! - [`ValueFactory`]: per-repository construction of terms and statements
//!
//! ## Design Principles
//!
//! 1. **Cheap clones**: term labels are `Arc<str>`-backed
//! 2. **Pass-through lexical forms**: literal labels are carried as strings;
//!    the client does not re-parse or re-serialize server values
//! 3. **NTriples-style rendering**: `Display` output is suitable for
//!    embedding in query text

pub mod factory;
pub mod identifier;
pub mod value;

pub use factory::{Statement, ValueFactory};
pub use identifier::Identifier;
pub use value::{BNode, Literal, Uri, Value};
