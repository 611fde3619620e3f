//! Dataset scope override for queries
//!
//! A [`Dataset`] names the graphs a query should be evaluated against,
//! overriding any scope the query text declares itself. Default graphs are
//! unioned for ordinary patterns; named graphs are addressable individually.

use quarry_model::Uri;

/// Declarative graph scope for a single query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    default_graphs: Vec<Uri>,
    named_graphs: Vec<Uri>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Add a graph to the default-graph union
    pub fn add_default_graph(&mut self, graph: Uri) {
        self.default_graphs.push(graph);
    }

    /// Add an individually addressable named graph
    pub fn add_named_graph(&mut self, graph: Uri) {
        self.named_graphs.push(graph);
    }

    /// Default graphs, in insertion order
    pub fn default_graphs(&self) -> &[Uri] {
        &self.default_graphs
    }

    /// Named graphs, in insertion order
    pub fn named_graphs(&self) -> &[Uri] {
        &self.named_graphs
    }

    /// True when no graphs are declared
    pub fn is_empty(&self) -> bool {
        self.default_graphs.is_empty() && self.named_graphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_default_and_named_graphs() {
        let mut ds = Dataset::new();
        assert!(ds.is_empty());
        ds.add_default_graph(Uri::new("http://example.org/g1"));
        ds.add_named_graph(Uri::new("http://example.org/g2"));
        assert_eq!(ds.default_graphs().len(), 1);
        assert_eq!(ds.named_graphs().len(), 1);
        assert!(!ds.is_empty());
    }
}
