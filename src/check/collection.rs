//! Membership and iteration checks.

use super::{Check, Expect};
use crate::{
   Result,
   types::{Callable, Class},
   value::{Key, Value},
};

const INVALID_ITEMS: &str = "Iterable contains invalid items";

/// What every element of an iterable must satisfy.
#[derive(Clone, Copy)]
pub enum Elements<'a> {
   /// Each element is an object of this class or a subtype.
   InstanceOf(&'a Class),
   /// The predicate returns true for each element.
   Matching(&'a dyn Fn(&Value) -> bool),
   /// Calling with the element yields a truthy value.
   Callable(&'a Callable),
}

impl Elements<'_> {
   fn accepts(&self, item: &Value) -> bool {
      match self {
         Self::InstanceOf(class) => matches!(item, Value::Object(obj) if obj.class.is_a(class)),
         Self::Matching(pred) => pred(item),
         Self::Callable(f) => f.call(std::slice::from_ref(item)).is_truthy(),
      }
   }
}

impl<'a> From<&'a Class> for Elements<'a> {
   fn from(class: &'a Class) -> Self {
      Self::InstanceOf(class)
   }
}

impl<'a> From<&'a Callable> for Elements<'a> {
   fn from(f: &'a Callable) -> Self {
      Self::Callable(f)
   }
}

impl<'a, F: Fn(&Value) -> bool> From<&'a F> for Elements<'a> {
   fn from(pred: &'a F) -> Self {
      Self::Matching(pred)
   }
}

impl Expect<'_> {
   /// `needle` is strictly equal to one of the array's values.
   pub fn has_array_value(&self, needle: &Value, array: &Value) -> Result<()> {
      let passed = array
         .entries()
         .is_some_and(|mut entries| entries.any(|(_, v)| v.strict_eq(needle)));
      self.ensure(Check::HasArrayValue, passed, "Value must be in array")
   }

   /// `key` is a string or int present as a key; `"1"` and `1` are the same
   /// key.
   pub fn has_array_key(&self, key: &Value, array: &Value) -> Result<()> {
      let key = match key {
         Value::Int(n) => Some(Key::Int(*n)),
         Value::String(s) => Some(Key::from_str_key(s)),
         _ => None,
      };
      let passed = key.is_some_and(|key| array.has_key(&key));
      self.ensure(Check::HasArrayKey, passed, "Value must be array key")
   }

   pub fn is_countable(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsCountable, value.is_countable(), "Value must be countable")
   }

   pub fn is_iterable(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsIterable, value.is_iterable(), "Value must be an iterable")
   }

   /// Stops at the first element that does not match. If a hook suppresses
   /// that failure the scan goes on, consulting the registry again for every
   /// later offender.
   pub fn is_iterable_of<'a>(&self, iterable: &Value, elements: impl Into<Elements<'a>>) -> Result<()> {
      let elements = elements.into();
      let Some(items) = iterable.elements() else {
         return self.fail(Check::IsIterableOf, INVALID_ITEMS.to_string());
      };

      for item in items {
         if !elements.accepts(item) {
            self.fail(Check::IsIterableOf, INVALID_ITEMS.to_string())?;
         }
      }
      Ok(())
   }
}
