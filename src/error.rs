use thiserror::Error;

use crate::registry::FailureKind;

/// Main error type for precheck.
///
/// The first five variants are check failures, one per [`FailureKind`], so
/// callers can discriminate programmatically with a plain `match`. The rest
/// cover the configuration layer and the command-line front end.
#[derive(Debug, Error)]
pub enum Error {
   /// A boolean assertion did not hold.
   #[error("{check}: {message}")]
   Logic { check: String, message: String },

   /// The argument had the wrong type or shape.
   #[error("{check}: {message}")]
   InvalidArgument { check: String, message: String },

   /// A numeric value was outside the required bound.
   #[error("{check}: {message}")]
   Range { check: String, message: String },

   /// The value was not among the expected ones.
   #[error("{check}: {message}")]
   UnexpectedValue { check: String, message: String },

   /// The value could not be called.
   #[error("{check}: {message}")]
   BadCallable { check: String, message: String },

   /// Configuration-related error occurred.
   #[error("config error: {0}")]
   Config(#[from] ConfigError),

   /// JSON serialization or deserialization error occurred.
   #[error("json error: {0}")]
   Json(#[from] serde_json::Error),

   /// A check name did not match anything in the catalog.
   #[error("unknown check: {0}")]
   UnknownCheck(String),

   /// A check was invoked with arguments it cannot take.
   #[error("{0}")]
   Usage(String),
}

impl Error {
   /// The failure kind, or `None` for errors that are not check failures.
   pub const fn kind(&self) -> Option<FailureKind> {
      match self {
         Self::Logic { .. } => Some(FailureKind::Logic),
         Self::InvalidArgument { .. } => Some(FailureKind::InvalidArgument),
         Self::Range { .. } => Some(FailureKind::Range),
         Self::UnexpectedValue { .. } => Some(FailureKind::UnexpectedValue),
         Self::BadCallable { .. } => Some(FailureKind::BadCallable),
         _ => None,
      }
   }

   /// Name of the check that raised this failure.
   pub fn check(&self) -> Option<&str> {
      match self {
         Self::Logic { check, .. }
         | Self::InvalidArgument { check, .. }
         | Self::Range { check, .. }
         | Self::UnexpectedValue { check, .. }
         | Self::BadCallable { check, .. } => Some(check),
         _ => None,
      }
   }

   /// Human-readable failure message without the check name.
   pub fn message(&self) -> Option<&str> {
      match self {
         Self::Logic { message, .. }
         | Self::InvalidArgument { message, .. }
         | Self::Range { message, .. }
         | Self::UnexpectedValue { message, .. }
         | Self::BadCallable { message, .. } => Some(message),
         _ => None,
      }
   }

   pub fn exit_code(&self) -> i32 {
      match self.kind() {
         Some(FailureKind::Logic) => 2,
         Some(FailureKind::InvalidArgument) => 3,
         Some(FailureKind::Range) => 4,
         Some(FailureKind::UnexpectedValue) => 5,
         Some(FailureKind::BadCallable) => 6,
         None => 1,
      }
   }
}

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
   /// One of the configuration layers could not be parsed.
   #[error("failed to load config: {0}")]
   Extract(#[from] Box<figment::Error>),

   /// `strict_names` is set and an override names no known check.
   #[error("override for unknown check '{0}'")]
   UnknownCheck(String),
}

impl From<figment::Error> for ConfigError {
   fn from(e: figment::Error) -> Self {
      Self::Extract(Box::new(e))
   }
}

/// Standard result type using [`enum@Error`] as the default error type
pub type Result<T, E = Error> = std::result::Result<T, E>;
