//! Tuple query result stream
//!
//! Adapts a raw `{names, values}` response into a typed, column-named row
//! stream. The stream supports a single forward pass (the remote response
//! may have been streamed); callers that need multiple passes collect the
//! rows first.

use quarry_model::Value;
use std::sync::Arc;
use std::vec;

/// Ordered column names plus a consuming sequence of aligned rows
#[derive(Debug)]
pub struct TupleQueryResult {
    names: Arc<Vec<String>>,
    rows: vec::IntoIter<Vec<Value>>,
}

impl TupleQueryResult {
    /// Create a result from column names and positionally aligned rows
    pub fn new(names: Vec<String>, values: Vec<Vec<Value>>) -> Self {
        TupleQueryResult {
            names: Arc::new(names),
            rows: values.into_iter(),
        }
    }

    /// Column names, in projection order
    pub fn binding_names(&self) -> &[String] {
        &self.names
    }

    /// Positional index of a column name, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Number of rows not yet consumed
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl Iterator for TupleQueryResult {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.next().map(|values| Row {
            names: Arc::clone(&self.names),
            values,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

/// One row of a tuple result, addressable positionally or by column name
#[derive(Debug, Clone)]
pub struct Row {
    names: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Row {
    /// Value at a positional index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value under a column name
    pub fn value(&self, name: &str) -> Option<&Value> {
        let index = self.names.iter().position(|n| n == name)?;
        self.values.get(index)
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the row has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cells, in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the row, yielding its cells in column order
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_model::{Literal, Uri};

    fn sample() -> TupleQueryResult {
        TupleQueryResult::new(
            vec!["s".into(), "p".into(), "o".into()],
            vec![
                vec![
                    Value::Uri(Uri::new("http://example.org/a")),
                    Value::Uri(Uri::new("http://example.org/b")),
                    Value::Literal(Literal::plain("c")),
                ],
                vec![
                    Value::Uri(Uri::new("http://example.org/d")),
                    Value::Uri(Uri::new("http://example.org/e")),
                    Value::Literal(Literal::plain("f")),
                ],
            ],
        )
    }

    #[test]
    fn rows_come_back_in_order() {
        let mut result = sample();
        assert_eq!(result.width(), 3);
        let first = result.next().unwrap();
        assert_eq!(first.get(0).unwrap().as_uri().unwrap().local_name(), "a");
        let second = result.next().unwrap();
        assert_eq!(second.get(0).unwrap().as_uri().unwrap().local_name(), "d");
        assert!(result.next().is_none());
    }

    #[test]
    fn column_lookup_by_name() {
        let mut result = sample();
        assert_eq!(result.index_of("o"), Some(2));
        assert_eq!(result.index_of("missing"), None);

        let row = result.next().unwrap();
        assert_eq!(row.value("o").unwrap().as_literal().unwrap().label(), "c");
        assert!(row.value("missing").is_none());
    }

    #[test]
    fn single_pass_consumption() {
        let result = sample();
        assert_eq!(result.remaining(), 2);
        let rows: Vec<_> = result.collect();
        assert_eq!(rows.len(), 2);
    }
}
