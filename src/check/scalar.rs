//! Boolean, emptiness and primitive type checks.

use super::{Check, Expect};
use crate::{Result, value::Value};

impl Expect<'_> {
   pub fn is_true(&self, condition: bool) -> Result<()> {
      self.ensure(Check::IsTrue, condition, "Expression must be true")
   }

   pub fn is_false(&self, condition: bool) -> Result<()> {
      self.ensure(Check::IsFalse, !condition, "Expression must be false")
   }

   /// Fails for null, falsy values and the string `"0.0"`.
   pub fn is_not_empty(&self, value: &Value) -> Result<()> {
      let passed = match value {
         Value::String(s) if s == "0.0" => false,
         other => other.is_truthy(),
      };
      self.ensure(Check::IsNotEmpty, passed, "Value must not be empty")
   }

   pub fn is_numeric(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsNumeric, value.is_numeric(), "Value must be numeric")
   }

   pub fn is_int(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsInt, matches!(value, Value::Int(_)), "Value must be integer")
   }

   pub fn is_float(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsFloat, matches!(value, Value::Float(_)), "Value must be float")
   }

   pub fn is_bool(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsBool, matches!(value, Value::Bool(_)), "Value must be boolean")
   }

   pub fn is_string(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsString, matches!(value, Value::String(_)), "Value must be string")
   }

   pub fn is_array(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsArray, value.is_array(), "Value must be array")
   }

   pub fn is_null(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsNull, value.is_null(), "Value must be null")
   }

   pub fn is_not_null(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsNotNull, !value.is_null(), "Value must not be null")
   }

   /// Only the boolean `false` fails; `0`, `""` and null pass.
   pub fn is_not_false(&self, value: &Value) -> Result<()> {
      self.ensure(
         Check::IsNotFalse,
         !matches!(value, Value::Bool(false)),
         "Value must not be false",
      )
   }

   pub fn is_not_true(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsNotTrue, !matches!(value, Value::Bool(true)), "Value must not be true")
   }
}
