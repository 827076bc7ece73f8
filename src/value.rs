//! Dynamic values and struct instances.

use crate::schema::{Schema, TType};
use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed field value.
///
/// Covers exactly the kinds the codec decodes: the primitives, strings,
/// order-significant lists, and nested struct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    I16(i16),
    I64(i64),
    String(String),
    List(Vec<Value>),
    Struct(StructValue),
}

impl Value {
    /// The wire tag this value encodes as.
    pub fn wire_type(&self) -> TType {
        match self {
            Value::Bool(_) => TType::Bool,
            Value::I16(_) => TType::I16,
            Value::I64(_) => TType::I64,
            Value::String(_) => TType::String,
            Value::List(_) => TType::List,
            Value::Struct(_) => TType::Struct,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::I16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Value {
        Value::I16(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::I64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::List(v)
    }
}

impl From<StructValue> for Value {
    fn from(v: StructValue) -> Value {
        Value::Struct(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{:?}", v),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Struct(v) => write!(f, "{}", v),
        }
    }
}

/// An in-memory struct instance: a mapping from field name to [`Value`],
/// where every field is optional. An absent field means "not set", which is
/// distinct from any zero value.
///
/// Instances are constructed empty against a [`Schema`], populated either by
/// [`set`](StructValue::set)/[`with`](StructValue::with) or by a full decode,
/// and compared structurally (same schema, same present-field mapping).
///
/// ```rust
/// use thrift_binary::StructValue;
/// use thrift_binary::hadoopfs::PATHNAME;
///
/// let p = StructValue::new(&PATHNAME).with("pathname", "/user/alice");
/// assert_eq!(p.get("pathname").and_then(|v| v.as_str()), Some("/user/alice"));
/// assert_eq!(p.to_string(), r#"Pathname(pathname="/user/alice")"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructValue {
    schema: &'static Schema,
    fields: BTreeMap<&'static str, Value>,
}

impl StructValue {
    /// Create an empty instance of the given struct type. All fields start
    /// absent.
    pub fn new(schema: &'static Schema) -> StructValue {
        StructValue {
            schema,
            fields: BTreeMap::new(),
        }
    }

    /// The schema this instance was created against.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The struct type's declared name.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Set a field. Replaces any previous value under the same name.
    pub fn set(&mut self, name: &'static str, value: impl Into<Value>) {
        self.fields.insert(name, value.into());
    }

    /// Chaining form of [`set`](StructValue::set), for building literals.
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> StructValue {
        self.set(name, value);
        self
    }

    /// Get a field's value, or `None` if it is absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Remove a field, returning its previous value. The field becomes
    /// absent, so encode will omit it entirely.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Whether the named field is present.
    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over present fields as `(name, value)` pairs, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v))
    }
}

impl fmt::Display for StructValue {
    /// Formats as `Name(field=value, ...)`. Present fields are listed in
    /// schema order; names outside the schema follow, in name order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.name)?;
        let mut first = true;
        for field in self.schema.fields {
            if let Some(value) = self.fields.get(field.name) {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(f, "{}={}", field.name, value)?;
            }
        }
        for (name, value) in &self.fields {
            if self.schema.field_by_name(name).is_none() {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(f, "{}={}", name, value)?;
            }
        }
        write!(f, ")")
    }
}
