//! Storage Data Types
//!
//! Products are schema-less: apart from `id` and `name`, every field is carried
//! through untouched, in the order the client sent it.

use serde_json::{Map, Number, Value};
use std::fmt;

/// A single product record exactly as it was ingested.
pub type Product = Map<String, Value>;

/// Key under which a product is stored.
///
/// Strings and numbers live in separate key spaces, so `"1"` and `1`
/// address different records. Numbers are keyed by value: `1`, `1.0` and
/// `true` all address the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductId {
    Text(String),
    /// Canonical rendering of the number; integral values drop any fraction.
    Number(String),
}

impl ProductId {
    /// Derives the storage key from a raw `id` value.
    ///
    /// Returns `None` for falsy ids (`null`, `false`, `""`, `0`) and for values
    /// that cannot act as a key (arrays, objects).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(ProductId::Text(s.clone())),
            Value::Number(n) if !is_zero(n) => Some(ProductId::Number(canonical_number(n))),
            Value::Bool(true) => Some(ProductId::Number("1".to_string())),
            _ => None,
        }
    }

    /// Reads the `id` field of a product, if it has a usable one.
    pub fn of(product: &Product) -> Option<Self> {
        product.get("id").and_then(Self::from_value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Text(s) => write!(f, "{:?}", s),
            ProductId::Number(n) => f.write_str(n),
        }
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64().map(|f| f == 0.0).unwrap_or(false)
}

fn canonical_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}
