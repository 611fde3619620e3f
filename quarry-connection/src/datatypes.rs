//! Native inlined-datatype tokens
//!
//! The remote store can inline certain scalar kinds into a compact internal
//! encoding, negotiated per predicate or per datatype. The client-facing
//! tokens form a closed set; each translates to one of the store's native
//! encoding tags.

use crate::error::StoreError;
use std::fmt;
use std::str::FromStr;

/// A scalar kind the store can inline
///
/// `Date` is a distinct accepted token but folds into the `date-time`
/// encoding tag: the store's native tag set is closed at
/// `{int, float, date-time}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    /// Integer values
    Int,
    /// Floating-point values
    Float,
    /// Calendar dates
    Date,
    /// Timestamps
    DateTime,
}

impl NativeType {
    /// The store-internal encoding tag for this kind
    pub fn encoding_tag(&self) -> &'static str {
        match self {
            NativeType::Int => "int",
            NativeType::Float => "float",
            NativeType::Date | NativeType::DateTime => "date-time",
        }
    }

    /// The XSD datatype IRI conventionally paired with this kind
    ///
    /// `Float` pairs with `xsd:double`: the store's float encoding is
    /// double-width.
    pub fn xsd_datatype(&self) -> &'static str {
        use quarry_vocab::xsd;
        match self {
            NativeType::Int => xsd::INT,
            NativeType::Float => xsd::DOUBLE,
            NativeType::Date => xsd::DATE,
            NativeType::DateTime => xsd::DATE_TIME,
        }
    }
}

impl FromStr for NativeType {
    type Err = StoreError;

    fn from_str(token: &str) -> Result<Self, StoreError> {
        match token.to_ascii_lowercase().as_str() {
            "int" => Ok(NativeType::Int),
            "float" => Ok(NativeType::Float),
            "date" => Ok(NativeType::Date),
            "datetime" => Ok(NativeType::DateTime),
            other => Err(StoreError::illegal_argument(format!(
                "Unknown inlined type '{other}'. Legal types are 'int', 'float', 'date', and 'datetime'"
            ))),
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NativeType::Int => "int",
            NativeType::Float => "float",
            NativeType::Date => "date",
            NativeType::DateTime => "datetime",
        })
    }
}
