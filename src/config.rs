//! Configuration for failure-kind overrides loaded from TOML files and the
//! environment.

use std::{
   collections::BTreeMap,
   path::{Path, PathBuf},
   sync::OnceLock,
};

use directories::BaseDirs;
use figment::{
   Figment,
   providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, registry::FailureKind};

pub const ENV_PREFIX: &str = "PRECHECK_";

/// Overrides that can be declared outside of code.
///
/// Hooks are closures and therefore only installable through
/// [`crate::Registry::register`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
   /// Failure kind to raise instead of the default, per check name.
   pub overrides:    BTreeMap<String, FailureKind>,
   /// Reject override names that are not catalog checks.
   pub strict_names: bool,
}

impl Config {
   /// Loads the global config file and `PRECHECK_*` environment variables.
   pub fn load() -> Result<Self, ConfigError> {
      Self::figment(None).extract().map_err(ConfigError::from)
   }

   /// Like [`Config::load`], with `path` layered between the global file and
   /// the environment.
   pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
      Self::figment(Some(path))
         .extract()
         .map_err(ConfigError::from)
   }

   fn figment(extra: Option<&Path>) -> Figment {
      let mut figment = Figment::from(Serialized::defaults(Self::default()));

      let global = config_file_path();
      if global.exists() {
         figment = figment.merge(Toml::file(global));
      }

      if let Some(path) = extra {
         if path.exists() {
            figment = figment.merge(Toml::file(path));
         } else {
            tracing::warn!("config file not found, skipping: {}", path.display());
         }
      }

      figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
   }
}

/// Returns the base directory for precheck configuration
pub fn base_dir() -> &'static PathBuf {
   static ONCE: OnceLock<PathBuf> = OnceLock::new();
   ONCE.get_or_init(|| resolve_base_dir(".precheck"))
}

pub fn config_file_path() -> &'static PathBuf {
   static ONCE: OnceLock<PathBuf> = OnceLock::new();
   ONCE.get_or_init(|| base_dir().join("config.toml"))
}

fn resolve_base_dir(dir_name: &str) -> PathBuf {
   BaseDirs::new()
      .map(|d| d.home_dir().join(dir_name))
      .or_else(|| {
         std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(dir_name))
      })
      .unwrap_or_else(|| {
         std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(dir_name)
      })
}
