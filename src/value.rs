//! The dynamic input type every value check inspects.

use std::{
   cmp::Ordering,
   fmt,
   sync::{Arc, LazyLock},
};

use indexmap::IndexMap;
use regex::Regex;

use crate::types::{Callable, Capabilities, Object, Resource};

/// Leading/trailing whitespace, sign, mantissa with optional fraction, and an
/// optional exponent.
static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
   Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
      .expect("numeric pattern is valid")
});

/// Array key. Canonical decimal strings are stored as integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
   Int(i64),
   Str(String),
}

impl Key {
   /// Normalizes `"42"` to `Int(42)`; keeps `"042"`, `"-0"` and `"4.2"` as
   /// strings.
   pub fn from_str_key(s: &str) -> Self {
      let digits = s.strip_prefix('-').unwrap_or(s);
      let canonical = !digits.is_empty()
         && digits.bytes().all(|b| b.is_ascii_digit())
         && (digits == "0" || !digits.starts_with('0'))
         && s != "-0";
      if canonical {
         if let Ok(n) = s.parse::<i64>() {
            return Self::Int(n);
         }
      }
      Self::Str(s.to_string())
   }
}

impl From<i64> for Key {
   fn from(n: i64) -> Self {
      Self::Int(n)
   }
}

impl From<i32> for Key {
   fn from(n: i32) -> Self {
      Self::Int(n.into())
   }
}

impl From<&str> for Key {
   fn from(s: &str) -> Self {
      Self::from_str_key(s)
   }
}

impl From<String> for Key {
   fn from(s: String) -> Self {
      Self::from_str_key(&s)
   }
}

impl fmt::Display for Key {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         Self::Int(n) => write!(f, "{n}"),
         Self::Str(s) => f.write_str(s),
      }
   }
}

/// A numeric bound for the range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
   Int(i64),
   Float(f64),
}

impl Number {
   /// Ints compare exactly; any float involvement compares as `f64`. `None`
   /// when either side is NaN.
   pub fn compare(self, other: Self) -> Option<Ordering> {
      match (self, other) {
         (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
         (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
      }
   }

   pub const fn as_f64(self) -> f64 {
      match self {
         Self::Int(n) => n as f64,
         Self::Float(f) => f,
      }
   }
}

impl From<i64> for Number {
   fn from(n: i64) -> Self {
      Self::Int(n)
   }
}

impl From<i32> for Number {
   fn from(n: i32) -> Self {
      Self::Int(n.into())
   }
}

impl From<f64> for Number {
   fn from(f: f64) -> Self {
      Self::Float(f)
   }
}

impl fmt::Display for Number {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         Self::Int(n) => write!(f, "{n}"),
         Self::Float(x) => write!(f, "{x}"),
      }
   }
}

/// Any value a check can be asked about.
#[derive(Debug, Clone, Default)]
pub enum Value {
   #[default]
   Null,
   Bool(bool),
   Int(i64),
   Float(f64),
   String(String),
   Sequence(Vec<Value>),
   Mapping(IndexMap<Key, Value>),
   Object(Arc<Object>),
   Callable(Callable),
   Resource(Resource),
}

impl Value {
   pub fn object(object: Object) -> Self {
      Self::Object(Arc::new(object))
   }

   pub fn callable(f: impl Fn(&[Self]) -> Self + Send + Sync + 'static) -> Self {
      Self::Callable(Callable::new(f))
   }

   pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
   where
      K: Into<Key>,
      V: Into<Self>,
   {
      Self::Mapping(
         entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
      )
   }

   pub const fn type_name(&self) -> &'static str {
      match self {
         Self::Null => "null",
         Self::Bool(_) => "bool",
         Self::Int(_) => "int",
         Self::Float(_) => "float",
         Self::String(_) => "string",
         Self::Sequence(_) | Self::Mapping(_) => "array",
         Self::Object(_) => "object",
         Self::Callable(_) => "callable",
         Self::Resource(_) => "resource",
      }
   }

   pub const fn is_null(&self) -> bool {
      matches!(self, Self::Null)
   }

   pub const fn is_array(&self) -> bool {
      matches!(self, Self::Sequence(_) | Self::Mapping(_))
   }

   pub const fn as_number(&self) -> Option<Number> {
      match self {
         Self::Int(n) => Some(Number::Int(*n)),
         Self::Float(f) => Some(Number::Float(*f)),
         _ => None,
      }
   }

   /// Falsy values are null, `false`, zero, `""`, `"0"` and empty arrays.
   pub fn is_truthy(&self) -> bool {
      match self {
         Self::Null => false,
         Self::Bool(b) => *b,
         Self::Int(n) => *n != 0,
         Self::Float(f) => *f != 0.0,
         Self::String(s) => !(s.is_empty() || s == "0"),
         Self::Sequence(items) => !items.is_empty(),
         Self::Mapping(map) => !map.is_empty(),
         Self::Object(_) | Self::Callable(_) | Self::Resource(_) => true,
      }
   }

   /// Ints, floats, and strings holding a decimal number.
   pub fn is_numeric(&self) -> bool {
      match self {
         Self::Int(_) | Self::Float(_) => true,
         Self::String(s) => is_numeric_str(s),
         _ => false,
      }
   }

   pub fn is_callable(&self) -> bool {
      match self {
         Self::Callable(_) => true,
         Self::Object(obj) => obj.is_invokable(),
         _ => false,
      }
   }

   pub fn is_countable(&self) -> bool {
      match self {
         Self::Sequence(_) | Self::Mapping(_) => true,
         Self::Object(obj) => obj.class.has(Capabilities::COUNT),
         _ => false,
      }
   }

   pub fn is_iterable(&self) -> bool {
      match self {
         Self::Sequence(_) | Self::Mapping(_) => true,
         Self::Object(obj) => obj.class.has(Capabilities::ITERATE),
         _ => false,
      }
   }

   /// Array entries in order; sequences are keyed by position.
   pub fn entries(&self) -> Option<Box<dyn Iterator<Item = (Key, &Self)> + '_>> {
      match self {
         Self::Sequence(items) => Some(Box::new(
            items
               .iter()
               .enumerate()
               .map(|(i, v)| (Key::Int(i as i64), v)),
         )),
         Self::Mapping(map) => Some(Box::new(map.iter().map(|(k, v)| (k.clone(), v)))),
         _ => None,
      }
   }

   /// What a `foreach` over the value would visit, if it is iterable.
   pub fn elements(&self) -> Option<Box<dyn Iterator<Item = &Self> + '_>> {
      match self {
         Self::Sequence(items) => Some(Box::new(items.iter())),
         Self::Mapping(map) => Some(Box::new(map.values())),
         Self::Object(obj) if obj.class.has(Capabilities::ITERATE) => {
            Some(Box::new(obj.elements.iter()))
         },
         _ => None,
      }
   }

   pub fn has_key(&self, key: &Key) -> bool {
      match (self, key) {
         (Self::Sequence(items), Key::Int(i)) => usize::try_from(*i).is_ok_and(|i| i < items.len()),
         (Self::Sequence(_), Key::Str(_)) => false,
         (Self::Mapping(map), key) => map.contains_key(key),
         _ => false,
      }
   }

   /// Identity comparison: same type and same value, arrays element-wise in
   /// order, reference types by pointer.
   pub fn strict_eq(&self, other: &Self) -> bool {
      match (self, other) {
         (Self::Null, Self::Null) => true,
         (Self::Bool(a), Self::Bool(b)) => a == b,
         (Self::Int(a), Self::Int(b)) => a == b,
         (Self::Float(a), Self::Float(b)) => a == b,
         (Self::String(a), Self::String(b)) => a == b,
         (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
         (Self::Callable(a), Self::Callable(b)) => a.ptr_eq(b),
         (Self::Resource(a), Self::Resource(b)) => a.id() == b.id(),
         (a, b) if a.is_array() && b.is_array() => match (a.entries(), b.entries()) {
            (Some(left), Some(right)) => {
               let left: Vec<_> = left.collect();
               let right: Vec<_> = right.collect();
               left.len() == right.len()
                  && left
                     .iter()
                     .zip(&right)
                     .all(|((ka, va), (kb, vb))| ka == kb && va.strict_eq(vb))
            },
            _ => false,
         },
         _ => false,
      }
   }
}

pub fn is_numeric_str(s: &str) -> bool {
   NUMERIC_RE.is_match(s)
}

impl From<bool> for Value {
   fn from(b: bool) -> Self {
      Self::Bool(b)
   }
}

impl From<i64> for Value {
   fn from(n: i64) -> Self {
      Self::Int(n)
   }
}

impl From<i32> for Value {
   fn from(n: i32) -> Self {
      Self::Int(n.into())
   }
}

impl From<u32> for Value {
   fn from(n: u32) -> Self {
      Self::Int(n.into())
   }
}

impl From<f64> for Value {
   fn from(f: f64) -> Self {
      Self::Float(f)
   }
}

impl From<&str> for Value {
   fn from(s: &str) -> Self {
      Self::String(s.to_string())
   }
}

impl From<String> for Value {
   fn from(s: String) -> Self {
      Self::String(s)
   }
}

impl From<Number> for Value {
   fn from(n: Number) -> Self {
      match n {
         Number::Int(n) => Self::Int(n),
         Number::Float(f) => Self::Float(f),
      }
   }
}

impl From<Object> for Value {
   fn from(obj: Object) -> Self {
      Self::object(obj)
   }
}

impl From<Resource> for Value {
   fn from(res: Resource) -> Self {
      Self::Resource(res)
   }
}

impl From<Callable> for Value {
   fn from(f: Callable) -> Self {
      Self::Callable(f)
   }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
   fn from(items: Vec<T>) -> Self {
      Self::Sequence(items.into_iter().map(Into::into).collect())
   }
}

impl<T: Into<Self>> From<Option<T>> for Value {
   fn from(opt: Option<T>) -> Self {
      opt.map_or(Self::Null, Into::into)
   }
}

impl From<serde_json::Value> for Value {
   fn from(json: serde_json::Value) -> Self {
      match json {
         serde_json::Value::Null => Self::Null,
         serde_json::Value::Bool(b) => Self::Bool(b),
         serde_json::Value::Number(n) => n
            .as_i64()
            .map(Self::Int)
            .or_else(|| n.as_f64().map(Self::Float))
            .unwrap_or(Self::Null),
         serde_json::Value::String(s) => Self::String(s),
         serde_json::Value::Array(items) => Self::from(items),
         serde_json::Value::Object(map) => Self::mapping(map),
      }
   }
}
