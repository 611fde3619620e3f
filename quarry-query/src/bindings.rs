//! Named variable bindings for queries
//!
//! A query carries a mutable [`Bindings`] map that predefines values for
//! variables before evaluation, so the same query object can be re-evaluated
//! with different inputs.

use quarry_model::Value;
use std::collections::HashMap;

/// Name-to-value assignments attached to a query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    map: HashMap<String, Value>,
}

impl Bindings {
    /// Create an empty binding set
    pub fn new() -> Self {
        Bindings::default()
    }

    /// Bind `name` to `value`, overwriting any prior binding for `name`
    pub fn add_binding(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    /// Remove the binding for `name`; unbound names are a no-op, not an error
    pub fn remove_binding(&mut self, name: &str) {
        self.map.remove(name);
    }

    /// The value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// True when `name` is bound
    pub fn is_bound(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (name, value) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_model::{Literal, Uri};

    #[test]
    fn add_binding_overwrites() {
        let mut b = Bindings::new();
        b.add_binding("x", Uri::new("http://example.org/first"));
        b.add_binding("x", Literal::plain("second"));
        assert_eq!(b.len(), 1);
        assert!(b.get("x").unwrap().as_literal().is_some());
    }

    #[test]
    fn remove_unbound_is_noop() {
        let mut b = Bindings::new();
        b.add_binding("x", Literal::plain("v"));
        b.remove_binding("never-bound");
        assert_eq!(b.len(), 1);
        assert!(b.is_bound("x"));
    }
}
