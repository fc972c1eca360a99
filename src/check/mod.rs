//! The check catalog.
//!
//! Every check evaluates one predicate. When it holds the check returns
//! `Ok(())`; otherwise the registry is consulted for the check's name:
//!
//! - no override: the default [`FailureKind`] is raised;
//! - [`Override::Kind`]: that kind is raised instead, with the same message;
//! - [`Override::Hook`]: the hook runs once. [`HookVerdict::Suppress`] turns
//!   the failure into `Ok(())`, anything else raises the default kind.

mod collection;
mod fs;
mod object;
mod range;
mod scalar;

use std::{fmt, str::FromStr};

pub use collection::Elements;
pub use object::Subject;

use crate::{
   Result,
   error::Error,
   registry::{self, FailureKind, HookVerdict, Override, Registry},
};

macro_rules! define_checks {
   ($($variant:ident => $name:literal, $kind:ident;)*) => {
      /// Identity of every check in the catalog.
      #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
      pub enum Check {
         $($variant,)*
      }

      impl Check {
         pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

         /// Registry key for this check.
         pub const fn name(self) -> &'static str {
            match self {
               $(Self::$variant => $name,)*
            }
         }

         pub const fn default_kind(self) -> FailureKind {
            match self {
               $(Self::$variant => FailureKind::$kind,)*
            }
         }
      }
   };
}

define_checks! {
   IsTrue => "is_true", Logic;
   IsFalse => "is_false", Logic;
   IsNotEmpty => "is_not_empty", InvalidArgument;
   IsNumeric => "is_numeric", InvalidArgument;
   IsInt => "is_int", InvalidArgument;
   IsFloat => "is_float", InvalidArgument;
   IsBool => "is_bool", InvalidArgument;
   IsObject => "is_object", InvalidArgument;
   IsString => "is_string", InvalidArgument;
   IsArray => "is_array", InvalidArgument;
   IsInstanceOf => "is_instance_of", UnexpectedValue;
   IsNull => "is_null", InvalidArgument;
   IsNotNull => "is_not_null", InvalidArgument;
   IsLowerThan => "is_lower_than", Range;
   IsLowerThanOrEqual => "is_lower_than_or_equal", Range;
   IsGreaterThan => "is_greater_than", Range;
   IsGreaterThanOrEqual => "is_greater_than_or_equal", Range;
   IsCallable => "is_callable", BadCallable;
   IsInvokable => "is_invokable", BadCallable;
   HasArrayValue => "has_array_value", UnexpectedValue;
   HasArrayKey => "has_array_key", UnexpectedValue;
   IsFile => "is_file", InvalidArgument;
   IsReadableFile => "is_readable_file", InvalidArgument;
   IsWritableFile => "is_writable_file", InvalidArgument;
   IsPath => "is_path", InvalidArgument;
   IsReadablePath => "is_readable_path", InvalidArgument;
   IsWritablePath => "is_writable_path", InvalidArgument;
   IsCountable => "is_countable", UnexpectedValue;
   IsIterable => "is_iterable", UnexpectedValue;
   IsResource => "is_resource", UnexpectedValue;
   IsSubclassOf => "is_subclass_of", UnexpectedValue;
   IsNotFalse => "is_not_false", InvalidArgument;
   IsNotTrue => "is_not_true", InvalidArgument;
   IsIterableOf => "is_iterable_of", InvalidArgument;
}

impl Check {
   /// Checks that take a filesystem path rather than a [`crate::Value`].
   pub const fn takes_path(self) -> bool {
      matches!(
         self,
         Self::IsFile
            | Self::IsReadableFile
            | Self::IsWritableFile
            | Self::IsPath
            | Self::IsReadablePath
            | Self::IsWritablePath
      )
   }
}

impl AsRef<str> for Check {
   fn as_ref(&self) -> &str {
      self.name()
   }
}

impl fmt::Display for Check {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.name())
   }
}

impl FromStr for Check {
   type Err = Error;

   /// Accepts `is_lower_than`, `isLowerThan` and `is-lower-than`.
   fn from_str(s: &str) -> Result<Self> {
      let wanted = normalize_name(s);
      Self::ALL
         .iter()
         .copied()
         .find(|check| normalize_name(check.name()) == wanted)
         .ok_or_else(|| Error::UnknownCheck(s.to_string()))
   }
}

fn normalize_name(s: &str) -> String {
   s.chars()
      .filter(|c| *c != '_' && *c != '-')
      .flat_map(char::to_lowercase)
      .collect()
}

/// Entry point to the catalog, bound to one [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct Expect<'r> {
   registry: &'r Registry,
}

impl<'r> Expect<'r> {
   pub const fn new(registry: &'r Registry) -> Self {
      Self { registry }
   }

   pub const fn registry(&self) -> &'r Registry {
      self.registry
   }

   /// Returns `Ok(())` when `passed`, otherwise the effective failure.
   fn ensure(&self, check: Check, passed: bool, message: impl Into<String>) -> Result<()> {
      if passed {
         return Ok(());
      }
      self.fail(check, message.into())
   }

   fn fail(&self, check: Check, message: String) -> Result<()> {
      let kind = match self.registry.resolve(check.name()) {
         None => check.default_kind(),
         Some(Override::Kind(kind)) => kind,
         Some(Override::Hook(hook)) => match hook.call() {
            HookVerdict::Suppress => return Ok(()),
            HookVerdict::Raise => check.default_kind(),
         },
      };
      Err(kind.raise(check.name(), message))
   }
}

impl Expect<'static> {
   /// The catalog bound to the process-wide registry.
   pub fn global() -> Self {
      Self::new(registry::global())
   }
}
