//! # Quarry Protocol
//!
//! The transport contract between the Quarry session layer and a remote
//! triple store.
//!
//! This crate provides:
//! - [`StoreTransport`]: the synchronous call/response trait apps implement
//!   against their wire layer (HTTP, socket, in-process)
//! - [`QueryResponse`]: the raw tabular envelope a query call returns
//! - [`MemoryTransport`]: an in-memory implementation that records calls and
//!   serves canned responses, for unit and integration tests
//!
//! ## Design Principles
//!
//! 1. **Synchronous seam**: every call blocks until the remote store answers
//!    or fails; retry policy, if any, lives inside the implementation
//! 2. **Opaque wire encoding**: the trait deals in query text and decoded
//!    [`Value`](quarry_model::Value) cells, never bytes

pub mod error;
pub mod response;
pub mod transport;

pub use error::{Result, TransportError};
pub use response::QueryResponse;
pub use transport::{MemoryTransport, StoreTransport, TransportCall};
