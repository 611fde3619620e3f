//! Repository lifecycle and server-side registrations
//!
//! A [`Repository`] owns the transport handle for one remote database and
//! tracks the session lifecycle: `Uninitialized → Initialized → ShutDown`,
//! with shutdown terminal. It is the factory for connections and the home
//! of the datatype-inlining and free-text registration calls.
//!
//! The mapping tables are append-mostly shared state: every connection
//! derived from a repository observes the same tables, guarded by `RwLock`.

use crate::connection::Connection;
use crate::datatypes::NativeType;
use crate::error::{Result, StoreError};
use crate::store::StoreSpec;
use quarry_model::{Identifier, ValueFactory};
use quarry_protocol::StoreTransport;
use quarry_query::QueryLanguageRegistry;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::{debug, warn};

/// Lifecycle states of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifecycleState {
    Uninitialized,
    Initialized,
    ShutDown,
}

/// A remote triple store, addressed by catalog and database name
///
/// A repository must be initialized before use and shut down before it is
/// discarded; shutdown releases the transport handle and is terminal.
/// Connections derived from a repository share its registered mappings and
/// fail once the repository is shut down.
#[derive(Debug)]
pub struct Repository {
    catalog: Option<String>,
    spec: StoreSpec,
    transport: RwLock<Option<Arc<dyn StoreTransport>>>,
    state: RwLock<LifecycleState>,
    languages: QueryLanguageRegistry,
    value_factory: OnceLock<ValueFactory>,
    mapped_predicates: RwLock<HashMap<String, &'static str>>,
    mapped_datatypes: RwLock<HashMap<String, &'static str>>,
}

impl Repository {
    /// Create a repository in the root catalog
    pub fn new(spec: StoreSpec, transport: Arc<dyn StoreTransport>) -> Self {
        Repository::with_catalog(None, spec, transport)
    }

    /// Create a repository in a named catalog
    pub fn with_catalog(
        catalog: Option<String>,
        spec: StoreSpec,
        transport: Arc<dyn StoreTransport>,
    ) -> Self {
        Repository {
            catalog,
            spec,
            transport: RwLock::new(Some(transport)),
            state: RwLock::new(LifecycleState::Uninitialized),
            languages: QueryLanguageRegistry::with_defaults(),
            value_factory: OnceLock::new(),
            mapped_predicates: RwLock::new(HashMap::new()),
            mapped_datatypes: RwLock::new(HashMap::new()),
        }
    }

    /// The catalog this database lives in, if not the root catalog
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    /// The name of the remote database this repository interfaces with
    pub fn database_name(&self) -> &str {
        self.spec.database_name()
    }

    /// The identity and creation parameters this repository was built over
    pub fn spec(&self) -> &StoreSpec {
        &self.spec
    }

    /// The query languages this repository's connections accept
    pub fn query_languages(&self) -> &QueryLanguageRegistry {
        &self.languages
    }

    /// Whether data in the store can be changed
    pub fn is_writable(&self) -> bool {
        self.spec.is_writable()
    }

    /// Establish the remote session
    ///
    /// Must be called before any data operation. Calling it again on an
    /// initialized repository is a no-op; calling it after shutdown fails.
    pub fn initialize(&self) -> Result<()> {
        let mut state = self.state.write().expect("RwLock poisoned");
        match *state {
            LifecycleState::Uninitialized => {
                debug!(
                    database = self.spec.database_name(),
                    verb = %self.spec.access_verb(),
                    options = ?self.spec.options().server_op_entries(),
                    "initializing repository"
                );
                *state = LifecycleState::Initialized;
                Ok(())
            }
            LifecycleState::Initialized => Ok(()),
            LifecycleState::ShutDown => {
                Err(StoreError::AlreadyShutDown(self.database_name().to_string()))
            }
        }
    }

    /// Release the transport handle; the repository is permanently unusable
    ///
    /// There is no restart path: the access verb may not make sense a
    /// second time around. Repeated shutdown is a no-op; every other
    /// operation after shutdown fails with an already-shut-down error.
    pub fn shut_down(&self) {
        let mut state = self.state.write().expect("RwLock poisoned");
        if *state == LifecycleState::ShutDown {
            debug!(database = self.spec.database_name(), "repository already shut down");
            return;
        }
        debug!(database = self.spec.database_name(), "shutting repository down");
        *state = LifecycleState::ShutDown;
        *self.transport.write().expect("RwLock poisoned") = None;
    }

    /// Open a connection for querying and updating the store
    ///
    /// Created connections need to be closed so that any resources they
    /// hold are released on every exit path.
    pub fn get_connection(self: &Arc<Self>) -> Result<Connection> {
        self.ensure_initialized()?;
        Ok(Connection::new(Arc::clone(self)))
    }

    /// The value factory for this store, built on first use
    pub fn value_factory(&self) -> &ValueFactory {
        self.value_factory.get_or_init(ValueFactory::new)
    }

    /// Register an inlined-datatype mapping, locally and with the server
    ///
    /// If `predicate` is given, objects of triples with that predicate use
    /// the inlined encoding of `native_type`; the native type is mandatory.
    /// Otherwise, if `datatype` is given, typed literals with that datatype
    /// use the inlined encoding of `native_type` — or, when no native type
    /// is supplied, of the datatype token itself.
    ///
    /// When both `predicate` and `datatype` are supplied, the predicate
    /// wins and the datatype argument is ignored. This is an explicit rule,
    /// not an accident of argument order.
    ///
    /// The registration writes shared server-side state; it is not
    /// reversible through this client.
    pub fn register_datatype_mapping(
        &self,
        predicate: Option<Identifier>,
        datatype: Option<Identifier>,
        native_type: Option<NativeType>,
    ) -> Result<()> {
        self.ensure_initialized()?;
        match (predicate, datatype) {
            (Some(predicate), datatype) => {
                if datatype.is_some() {
                    warn!(
                        predicate = %predicate,
                        "both predicate and datatype supplied; predicate takes precedence"
                    );
                }
                let native_type = native_type.ok_or_else(|| {
                    StoreError::illegal_argument(
                        "Missing 'native_type' parameter when registering a predicate mapping",
                    )
                })?;
                let tag = native_type.encoding_tag();
                debug!(predicate = %predicate, tag, "registering predicate mapping");
                self.mapped_predicates
                    .write()
                    .expect("RwLock poisoned")
                    .insert(predicate.as_uri_str().to_string(), tag);
                self.transport()?
                    .add_mapped_predicate(&predicate.to_wire_form(), tag)?;
                Ok(())
            }
            (None, Some(datatype)) => {
                let native_type = match native_type {
                    Some(nt) => nt,
                    None => datatype.as_uri_str().parse()?,
                };
                let tag = native_type.encoding_tag();
                debug!(datatype = %datatype, tag, "registering datatype mapping");
                self.mapped_datatypes
                    .write()
                    .expect("RwLock poisoned")
                    .insert(datatype.as_uri_str().to_string(), tag);
                self.transport()?
                    .add_mapped_type(&datatype.to_wire_form(), tag)?;
                Ok(())
            }
            (None, None) => Err(StoreError::illegal_argument(
                "Either 'predicate' or 'datatype' must be supplied to register_datatype_mapping",
            )),
        }
    }

    /// Tell the store to free-text-index object strings for a predicate
    ///
    /// Needed for the store's full-text match operator to cover the
    /// predicate's triples.
    pub fn register_free_text_predicate(&self, predicate: Identifier) -> Result<()> {
        self.ensure_initialized()?;
        debug!(predicate = %predicate, "registering free-text predicate");
        self.transport()?
            .register_free_text_predicate(&predicate.to_wire_form())?;
        Ok(())
    }

    /// The predicates registered for free-text indexing, in wire form
    pub fn list_free_text_predicates(&self) -> Result<Vec<String>> {
        self.ensure_initialized()?;
        Ok(self.transport()?.list_free_text_predicates()?)
    }

    /// Snapshot of registered predicate mappings (bare URI → encoding tag)
    pub fn predicate_mappings(&self) -> HashMap<String, &'static str> {
        self.mapped_predicates
            .read()
            .expect("RwLock poisoned")
            .clone()
    }

    /// Snapshot of registered datatype mappings (bare URI → encoding tag)
    pub fn datatype_mappings(&self) -> HashMap<String, &'static str> {
        self.mapped_datatypes
            .read()
            .expect("RwLock poisoned")
            .clone()
    }

    /// Check the repository is usable for data operations
    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        match *self.state.read().expect("RwLock poisoned") {
            LifecycleState::Initialized => Ok(()),
            LifecycleState::Uninitialized => {
                Err(StoreError::NotInitialized(self.database_name().to_string()))
            }
            LifecycleState::ShutDown => {
                Err(StoreError::AlreadyShutDown(self.database_name().to_string()))
            }
        }
    }

    /// The transport handle, failing after shutdown
    pub(crate) fn transport(&self) -> Result<Arc<dyn StoreTransport>> {
        self.transport
            .read()
            .expect("RwLock poisoned")
            .clone()
            .ok_or_else(|| StoreError::AlreadyShutDown(self.database_name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AccessVerb, StoreSpec};
    use quarry_protocol::{MemoryTransport, TransportCall};

    fn repository() -> (Arc<Repository>, Arc<MemoryTransport>) {
        let transport = Arc::new(MemoryTransport::new());
        let repo = Arc::new(Repository::new(
            StoreSpec::new(AccessVerb::Open, "kennedy"),
            transport.clone() as Arc<dyn StoreTransport>,
        ));
        repo.initialize().unwrap();
        (repo, transport)
    }

    #[test]
    fn operations_before_initialize_fail() {
        let repo = Arc::new(Repository::new(
            StoreSpec::new(AccessVerb::Open, "kennedy"),
            Arc::new(MemoryTransport::new()) as Arc<dyn StoreTransport>,
        ));
        let err = repo.get_connection().unwrap_err();
        assert!(matches!(err, StoreError::NotInitialized(ref db) if db == "kennedy"));
    }

    #[test]
    fn initialize_twice_is_a_noop() {
        let (repo, _) = repository();
        repo.initialize().unwrap();
        assert!(repo.get_connection().is_ok());
    }

    #[test]
    fn predicate_mapping_requires_native_type() {
        let (repo, transport) = repository();
        let err = repo
            .register_datatype_mapping(Some("http://example.org/age".into()), None, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::IllegalArgument(_)));
        assert!(err.to_string().contains("native_type"));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn predicate_mapping_updates_table_and_calls_server_once() {
        let (repo, transport) = repository();
        repo.register_datatype_mapping(
            Some("http://example.org/age".into()),
            None,
            Some(NativeType::Int),
        )
        .unwrap();

        assert_eq!(
            repo.predicate_mappings().get("http://example.org/age"),
            Some(&"int")
        );
        assert_eq!(
            transport.calls(),
            vec![TransportCall::AddMappedPredicate {
                uri: "<http://example.org/age>".into(),
                native_tag: "int".into(),
            }]
        );
    }

    #[test]
    fn predicate_takes_precedence_over_datatype() {
        let (repo, transport) = repository();
        repo.register_datatype_mapping(
            Some("http://example.org/height".into()),
            Some(quarry_vocab::xsd::DOUBLE.into()),
            Some(NativeType::Float),
        )
        .unwrap();

        assert!(repo.datatype_mappings().is_empty());
        assert_eq!(
            repo.predicate_mappings().get("http://example.org/height"),
            Some(&"float")
        );
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], TransportCall::AddMappedPredicate { .. }));
    }

    #[test]
    fn datatype_mapping_registers_with_server() {
        let (repo, transport) = repository();
        repo.register_datatype_mapping(
            None,
            Some(quarry_vocab::xsd::DATE.into()),
            Some(NativeType::Date),
        )
        .unwrap();

        assert_eq!(
            repo.datatype_mappings()
                .get(quarry_vocab::xsd::DATE),
            Some(&"date-time")
        );
        assert_eq!(
            transport.calls(),
            vec![TransportCall::AddMappedType {
                uri: format!("<{}>", quarry_vocab::xsd::DATE),
                native_tag: "date-time".into(),
            }]
        );
    }

    #[test]
    fn mapping_with_neither_argument_fails() {
        let (repo, _) = repository();
        let err = repo.register_datatype_mapping(None, None, None).unwrap_err();
        assert!(matches!(err, StoreError::IllegalArgument(_)));
    }

    #[test]
    fn free_text_predicate_round_trip() {
        let (repo, _) = repository();
        repo.register_free_text_predicate("http://example.org/comment".into())
            .unwrap();
        assert_eq!(
            repo.list_free_text_predicates().unwrap(),
            vec!["<http://example.org/comment>".to_string()]
        );
    }

    #[test]
    fn shutdown_is_terminal() {
        let (repo, _) = repository();
        repo.shut_down();
        repo.shut_down(); // repeated shutdown is a no-op

        let err = repo.get_connection().unwrap_err();
        assert!(matches!(err, StoreError::AlreadyShutDown(ref db) if db == "kennedy"));

        let err = repo
            .register_datatype_mapping(
                Some("http://example.org/age".into()),
                None,
                Some(NativeType::Int),
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyShutDown(_)));

        let err = repo.initialize().unwrap_err();
        assert!(matches!(err, StoreError::AlreadyShutDown(_)));
    }

    #[test]
    fn value_factory_is_shared() {
        let (repo, _) = repository();
        let a = repo.value_factory() as *const _;
        let b = repo.value_factory() as *const _;
        assert_eq!(a, b);
    }
}
