//! Class, callable and resource checks.

use super::{Check, Expect};
use crate::{Result, types::Class, value::Value};

/// The left-hand side of [`Expect::is_subclass_of`]: an instance, or a class
/// named directly.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
   Instance(&'a Value),
   Class(&'a Class),
}

impl Subject<'_> {
   fn class(&self) -> Option<&Class> {
      match self {
         Subject::Instance(Value::Object(obj)) => Some(obj.class.as_ref()),
         Subject::Instance(_) => None,
         Subject::Class(class) => Some(class),
      }
   }
}

impl<'a> From<&'a Value> for Subject<'a> {
   fn from(value: &'a Value) -> Self {
      Self::Instance(value)
   }
}

impl<'a> From<&'a Class> for Subject<'a> {
   fn from(class: &'a Class) -> Self {
      Self::Class(class)
   }
}

impl Expect<'_> {
   /// Objects pass unless their class is invokable.
   pub fn is_object(&self, value: &Value) -> Result<()> {
      let passed = matches!(value, Value::Object(obj) if !obj.is_invokable());
      self.ensure(Check::IsObject, passed, "Value must be an object")
   }

   /// The object's class is `class`, extends it, or implements it.
   pub fn is_instance_of(&self, value: &Value, class: &Class) -> Result<()> {
      let passed = matches!(value, Value::Object(obj) if obj.class.is_a(class));
      self.ensure(Check::IsInstanceOf, passed, format!("Value must be instance of {class}"))
   }

   /// Strict: a class is never a subclass of itself.
   pub fn is_subclass_of<'a>(&self, subject: impl Into<Subject<'a>>, parent: &Class) -> Result<()> {
      let subject = subject.into();
      let passed = subject
         .class()
         .is_some_and(|class| class.is_subclass_of(parent));
      self.ensure(
         Check::IsSubclassOf,
         passed,
         format!("Object must be a subclass of {parent}"),
      )
   }

   pub fn is_callable(&self, value: &Value) -> Result<()> {
      self.ensure(Check::IsCallable, value.is_callable(), "Value must be callable")
   }

   /// Closures and objects whose class exposes a call operator.
   pub fn is_invokable(&self, value: &Value) -> Result<()> {
      let passed = match value {
         Value::Callable(_) => true,
         Value::Object(obj) => obj.is_invokable(),
         _ => false,
      };
      self.ensure(Check::IsInvokable, passed, "Value must be invokable")
   }

   /// Open native handles only; a closed handle fails.
   pub fn is_resource(&self, value: &Value) -> Result<()> {
      let passed = matches!(value, Value::Resource(res) if res.is_open());
      self.ensure(Check::IsResource, passed, "Value must be a resource")
   }
}
