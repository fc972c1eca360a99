//! CLI command implementations for precheck.
//!
//! Each module corresponds to a subcommand of the `precheck` binary.

pub mod list;
pub mod path;
pub mod value;

use crate::{Check, Error, Result, Value, value::Number};

/// Parses a command-line argument as JSON, falling back to a plain string
/// for bare words such as `hello`.
pub fn parse_value(raw: &str) -> Value {
   serde_json::from_str::<serde_json::Value>(raw).map_or_else(|_| Value::from(raw), Value::from)
}

pub fn parse_number(raw: &str) -> Result<Number> {
   match serde_json::from_str::<serde_json::Value>(raw)? {
      serde_json::Value::Number(n) => n
         .as_i64()
         .map(Number::Int)
         .or_else(|| n.as_f64().map(Number::Float))
         .ok_or_else(|| Error::Usage(format!("bound out of range: {raw}"))),
      _ => Err(Error::Usage(format!("bound must be a number: {raw}"))),
   }
}

pub fn parse_check(raw: &str) -> Result<Check> {
   raw.parse()
}
