//! Query response envelope

use quarry_model::Value;
use serde::{Deserialize, Serialize};

/// Raw tabular response from a remote query call
///
/// Rows are aligned positionally to `names`; the transport decodes wire
/// values into [`Value`] cells but applies no further interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Ordered column names, one per projected variable
    pub names: Vec<String>,

    /// Row values, each row positionally aligned to `names`
    pub values: Vec<Vec<Value>>,
}

impl QueryResponse {
    /// Create a response from column names and rows
    pub fn new(names: Vec<String>, values: Vec<Vec<Value>>) -> Self {
        QueryResponse { names, values }
    }

    /// A response with no columns and no rows
    pub fn empty() -> Self {
        QueryResponse::default()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.names.len()
    }
}
