//! Runtime precondition checks with overridable failures.
//!
//! ```
//! use precheck::{Expect, FailureKind, Registry, Value};
//!
//! let registry = Registry::new();
//! let expect = Expect::new(&registry);
//!
//! expect.is_numeric(&Value::from("5.5")).unwrap();
//! assert!(expect.is_lower_than(&Value::from(5), 5).is_err());
//!
//! registry.register("is_lower_than", FailureKind::InvalidArgument);
//! let err = expect.is_lower_than(&Value::from(5), 5).unwrap_err();
//! assert_eq!(err.kind(), Some(FailureKind::InvalidArgument));
//! ```

pub mod check;
pub mod cmd;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;
pub mod value;

pub use check::{Check, Elements, Expect, Subject};
pub use config::Config;
pub use error::{ConfigError, Error, Result};
pub use registry::{FailureKind, Hook, HookVerdict, Override, Registry};
pub use types::{Callable, Capabilities, Class, Object, Resource};
pub use value::{Key, Number, Value};

/// The catalog bound to the process-wide registry.
pub fn expect() -> Expect<'static> {
   Expect::global()
}
