//! Bound checks over ints and floats.

use std::cmp::Ordering;

use super::{Check, Expect};
use crate::{
   Result,
   value::{Number, Value},
};

impl Expect<'_> {
   pub fn is_lower_than(&self, value: &Value, max: impl Into<Number>) -> Result<()> {
      let max = max.into();
      self.ensure(
         Check::IsLowerThan,
         compare(value, max).is_some_and(Ordering::is_lt),
         format!("Value must be lower than {max}"),
      )
   }

   pub fn is_lower_than_or_equal(&self, value: &Value, max: impl Into<Number>) -> Result<()> {
      let max = max.into();
      self.ensure(
         Check::IsLowerThanOrEqual,
         compare(value, max).is_some_and(Ordering::is_le),
         format!("Value must be lower than or equal to {max}"),
      )
   }

   pub fn is_greater_than(&self, value: &Value, min: impl Into<Number>) -> Result<()> {
      let min = min.into();
      self.ensure(
         Check::IsGreaterThan,
         compare(value, min).is_some_and(Ordering::is_gt),
         format!("Value must be greater than {min}"),
      )
   }

   pub fn is_greater_than_or_equal(&self, value: &Value, min: impl Into<Number>) -> Result<()> {
      let min = min.into();
      self.ensure(
         Check::IsGreaterThanOrEqual,
         compare(value, min).is_some_and(Ordering::is_ge),
         format!("Value must be greater than or equal to {min}"),
      )
   }
}

/// `None` for non-numeric values (numeric strings included) and NaN.
fn compare(value: &Value, bound: Number) -> Option<Ordering> {
   value.as_number()?.compare(bound)
}
