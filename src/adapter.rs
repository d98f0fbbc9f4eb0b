//! The value adapter functions use to inspect, coerce and build host values.
//!
//! Functions never touch a concrete JSON representation directly. Everything
//! they need goes through [`Adapter`], so the same function bodies run against
//! any host that implements it. [`JsonAdapter`] binds the contract to
//! [`serde_json::Value`].
use std::{cmp::Ordering, fmt};

use serde_json::{Number, Value};

/// The kind of a call argument, as reported by an [`Adapter`].
///
/// `Expression` is never the kind of a value. It is reported for arguments
/// that are unevaluated expression references (`&foo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Expression,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => f.write_str("null"),
            ValueKind::Boolean => f.write_str("boolean"),
            ValueKind::Number => f.write_str("number"),
            ValueKind::String => f.write_str("string"),
            ValueKind::Array => f.write_str("array"),
            ValueKind::Object => f.write_str("object"),
            ValueKind::Expression => f.write_str("expression"),
        }
    }
}

/// A resolved call-site argument.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArgument<V> {
    Value(V),
    /// Source text of an expression reference that was passed unevaluated.
    Expression(String),
}

impl<V> FunctionArgument<V> {
    pub fn expression(expr: &str) -> Self {
        FunctionArgument::Expression(expr.to_owned())
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            FunctionArgument::Value(v) => Some(v),
            FunctionArgument::Expression(_) => None,
        }
    }
}

impl<V> From<V> for FunctionArgument<V> {
    fn from(value: V) -> Self {
        FunctionArgument::Value(value)
    }
}

pub trait Adapter {
    type Value: Clone;

    fn kind_of(&self, value: &Self::Value) -> ValueKind;

    /// String conversion used for coercion. Defined for every kind.
    fn to_string_value(&self, value: &Self::Value) -> String;

    fn to_numeric_value(&self, value: &Self::Value) -> f64;

    fn to_sequence(&self, value: &Self::Value) -> Vec<Self::Value>;

    fn make_string(&self, s: String) -> Self::Value;

    fn make_number(&self, n: f64) -> Self::Value;

    fn make_boolean(&self, b: bool) -> Self::Value;

    fn make_array(&self, items: Vec<Self::Value>) -> Self::Value;

    fn make_null(&self) -> Self::Value;

    fn compare_numeric(&self, a: &Self::Value, b: &Self::Value) -> Ordering {
        self.to_numeric_value(a)
            .total_cmp(&self.to_numeric_value(b))
    }

    fn kind_of_argument(&self, arg: &FunctionArgument<Self::Value>) -> ValueKind {
        match arg {
            FunctionArgument::Value(v) => self.kind_of(v),
            FunctionArgument::Expression(_) => ValueKind::Expression,
        }
    }
}

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl JsonAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Adapter for JsonAdapter {
    type Value = Value;

    fn kind_of(&self, value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    fn to_string_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            _ => value.to_string(),
        }
    }

    fn to_numeric_value(&self, value: &Value) -> f64 {
        value.as_f64().unwrap_or(f64::NAN)
    }

    fn to_sequence(&self, value: &Value) -> Vec<Value> {
        match value {
            Value::Array(items) => items.clone(),
            _ => Vec::new(),
        }
    }

    fn make_string(&self, s: String) -> Value {
        Value::String(s)
    }

    fn make_number(&self, n: f64) -> Value {
        if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
            Value::Number((n as i64).into())
        } else {
            Number::from_f64(n).map_or(Value::Null, Value::Number)
        }
    }

    fn make_boolean(&self, b: bool) -> Value {
        Value::Bool(b)
    }

    fn make_array(&self, items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    fn make_null(&self) -> Value {
        Value::Null
    }
}
