use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Span or resource attributes, keyed by attribute name
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Attribute value
///
/// Collectors hand these out in two shapes: a bare JSON primitive or array,
/// or an object carrying a `type` discriminator next to its `value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Typed(TypedValue),
    Array(Vec<AttributeValue>),
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Other(serde_json::Value),
}

/// Explicitly typed attribute value: `{"type": "int", "value": 3}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TypedValue {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Array(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Single-line display form. Arrays and byte strings are summarized by length.
    pub fn render(&self) -> String {
        match self {
            AttributeValue::Typed(typed) => match typed {
                TypedValue::String(s) => s.clone(),
                TypedValue::Int(i) => i.to_string(),
                TypedValue::Double(d) => d.to_string(),
                TypedValue::Bool(b) => b.to_string(),
                TypedValue::Bytes(bytes) => format!("[{} bytes]", bytes.len()),
                TypedValue::Array(items) => format!("[{} items]", items.len()),
            },
            AttributeValue::Array(items) => format!("[{} items]", items.len()),
            AttributeValue::String(s) => s.clone(),
            AttributeValue::Int(i) => i.to_string(),
            AttributeValue::Double(d) => d.to_string(),
            AttributeValue::Bool(b) => b.to_string(),
            AttributeValue::Other(_) => "unknown".to_string(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Typed(typed) => match typed {
                TypedValue::String(_) => "string",
                TypedValue::Int(_) => "int",
                TypedValue::Double(_) => "double",
                TypedValue::Bool(_) => "bool",
                TypedValue::Bytes(_) => "bytes",
                TypedValue::Array(_) => "array",
            },
            AttributeValue::Array(_) => "array",
            AttributeValue::String(_) => "string",
            AttributeValue::Int(_) => "int",
            // Bare numbers carry no type, so whole values read as ints.
            AttributeValue::Double(d) if d.fract() == 0.0 => "int",
            AttributeValue::Double(_) => "double",
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Other(_) => "unknown",
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self,
            AttributeValue::Array(_) | AttributeValue::Typed(TypedValue::Array(_))
        )
    }

    /// Elements of an array value; empty for anything else
    pub fn array_items(&self) -> &[AttributeValue] {
        match self {
            AttributeValue::Array(items) | AttributeValue::Typed(TypedValue::Array(items)) => {
                items
            }
            _ => &[],
        }
    }
}
