//! Error type compact IRIs
//!
//! These compact IRI strings identify error types in client diagnostics.
//! They follow the pattern: `err:category/ErrorName`
//!
//! The `err:` prefix maps to `https://ns.quarrydb.dev/errors#` in the full
//! JSON-LD context.

/// Error namespace prefix
pub const ERR_PREFIX: &str = "err:";

// =============================================================================
// Store Errors (store)
// =============================================================================

/// Malformed or missing required argument
pub const ILLEGAL_ARGUMENT: &str = "err:store/IllegalArgument";

/// Unknown option key, wrong option value kind, or unsupported query language
pub const ILLEGAL_OPTION: &str = "err:store/IllegalOption";

/// Feature contractually declared but not yet available
pub const UNIMPLEMENTED: &str = "err:store/Unimplemented";

/// Operation attempted on a repository before successful initialization
pub const NOT_INITIALIZED: &str = "err:store/NotInitialized";

/// Operation attempted on a repository after shutdown
pub const ALREADY_SHUT_DOWN: &str = "err:store/AlreadyShutDown";

/// Connection used after it was closed
pub const SESSION_CLOSED: &str = "err:store/SessionClosed";

// =============================================================================
// Transport Errors (transport)
// =============================================================================

/// Remote call failed or returned an error payload
pub const SERVER_ERROR: &str = "err:transport/ServerError";

/// Transport endpoint unreachable
pub const UNAVAILABLE: &str = "err:transport/Unavailable";
