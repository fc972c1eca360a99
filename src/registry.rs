//! Per-check failure overrides.

use std::{
   collections::HashMap,
   fmt,
   str::FromStr,
   sync::{Arc, LazyLock},
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{
   Result,
   check::Check,
   config::Config,
   error::{ConfigError, Error},
};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Classifies why a check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
   Logic,
   InvalidArgument,
   Range,
   UnexpectedValue,
   BadCallable,
}

impl FailureKind {
   pub const ALL: [Self; 5] = [
      Self::Logic,
      Self::InvalidArgument,
      Self::Range,
      Self::UnexpectedValue,
      Self::BadCallable,
   ];

   pub const fn as_str(self) -> &'static str {
      match self {
         Self::Logic => "logic",
         Self::InvalidArgument => "invalid-argument",
         Self::Range => "range",
         Self::UnexpectedValue => "unexpected-value",
         Self::BadCallable => "bad-callable",
      }
   }

   /// Builds the error variant for this kind.
   pub fn raise(self, check: impl Into<String>, message: impl Into<String>) -> Error {
      let check = check.into();
      let message = message.into();
      match self {
         Self::Logic => Error::Logic { check, message },
         Self::InvalidArgument => Error::InvalidArgument { check, message },
         Self::Range => Error::Range { check, message },
         Self::UnexpectedValue => Error::UnexpectedValue { check, message },
         Self::BadCallable => Error::BadCallable { check, message },
      }
   }
}

impl fmt::Display for FailureKind {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

impl FromStr for FailureKind {
   type Err = Error;

   fn from_str(s: &str) -> Result<Self> {
      Self::ALL
         .into_iter()
         .find(|kind| kind.as_str() == s)
         .ok_or_else(|| Error::Usage(format!("unknown failure kind: {s}")))
   }
}

/// What a hook decided after observing a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookVerdict {
   /// Cancel the failure; the check returns `Ok(())`.
   Suppress,
   /// Raise the check's default failure anyway.
   Raise,
}

/// Zero-argument callback run in place of raising.
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn() -> HookVerdict + Send + Sync>);

impl Hook {
   pub fn new(f: impl Fn() -> HookVerdict + Send + Sync + 'static) -> Self {
      Self(Arc::new(f))
   }

   /// A hook that only observes: it runs `f` and lets the failure through.
   pub fn observer(f: impl Fn() + Send + Sync + 'static) -> Self {
      Self::new(move || {
         f();
         HookVerdict::Raise
      })
   }

   pub fn call(&self) -> HookVerdict {
      (self.0)()
   }
}

impl fmt::Debug for Hook {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("Hook(..)")
   }
}

/// Customized failure behaviour for one check name.
#[derive(Debug, Clone)]
pub enum Override {
   Kind(FailureKind),
   Hook(Hook),
}

impl From<FailureKind> for Override {
   fn from(kind: FailureKind) -> Self {
      Self::Kind(kind)
   }
}

impl From<Hook> for Override {
   fn from(hook: Hook) -> Self {
      Self::Hook(hook)
   }
}

/// Mapping from check name to [`Override`].
///
/// Names are free-form: registering a name the catalog never uses is allowed
/// and simply has no effect. Catalog names are stored in snake_case whatever
/// spelling they were registered under.
#[derive(Default)]
pub struct Registry {
   inner: RwLock<HashMap<String, Override>>,
}

impl Registry {
   pub fn new() -> Self {
      Self::default()
   }

   /// Installs `ovr` for `name`, replacing any previous override.
   ///
   /// Any spelling the catalog accepts (`isLowerThan`, `is-lower-than`) is
   /// stored under the check's snake_case name.
   pub fn register(&self, name: impl AsRef<str>, ovr: impl Into<Override>) {
      let name = canonical_name(name.as_ref());
      let ovr = ovr.into();
      tracing::debug!(check = %name, ?ovr, "registering override");
      self.inner.write().insert(name, ovr);
   }

   /// Removes every override.
   pub fn reset(&self) {
      let mut map = self.inner.write();
      if !map.is_empty() {
         tracing::debug!(count = map.len(), "clearing overrides");
      }
      map.clear();
   }

   /// Returns a copy of the override for `name`; the lock is not held
   /// afterwards, so a hook may call back into the registry.
   pub fn resolve(&self, name: &str) -> Option<Override> {
      self.inner.read().get(name).cloned()
   }

   pub fn contains(&self, name: &str) -> bool {
      self.inner.read().contains_key(name)
   }

   pub fn len(&self) -> usize {
      self.inner.read().len()
   }

   pub fn is_empty(&self) -> bool {
      self.inner.read().is_empty()
   }

   /// Registers every kind override from `cfg`.
   ///
   /// With `strict_names` set, the whole batch is rejected if any name is
   /// not a catalog check.
   pub fn apply_config(&self, cfg: &Config) -> Result<()> {
      if cfg.strict_names {
         if let Some(name) = cfg
            .overrides
            .keys()
            .find(|name| name.parse::<Check>().is_err())
         {
            return Err(ConfigError::UnknownCheck(name.clone()).into());
         }
      }

      let mut map = self.inner.write();
      for (name, kind) in &cfg.overrides {
         map.insert(canonical_name(name), Override::Kind(*kind));
      }
      tracing::debug!(count = cfg.overrides.len(), "applied config overrides");
      Ok(())
   }
}

/// Catalog names map to their snake_case form; anything else is kept as is.
fn canonical_name(name: &str) -> String {
   name
      .parse::<Check>()
      .map_or_else(|_| name.to_string(), |check| check.name().to_string())
}

impl fmt::Debug for Registry {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_map().entries(self.inner.read().iter()).finish()
   }
}

/// The process-wide registry used by [`crate::expect`].
pub fn global() -> &'static Registry {
   &GLOBAL
}

/// Registers an override on the process-wide registry.
pub fn register(name: impl AsRef<str>, ovr: impl Into<Override>) {
   global().register(name, ovr);
}

/// Clears the process-wide registry.
pub fn reset() {
   global().reset();
}
