//! `precheck list`: show every check and the kind it raises.

use console::style;
use serde::Serialize;

use crate::{Check, FailureKind, Registry, Result, registry::Override};

#[derive(Debug, Serialize)]
pub struct CheckEntry {
   pub name:         &'static str,
   pub default_kind: FailureKind,
   /// Kind raised after overrides, or `"hook"` when a hook is installed.
   pub effective:    String,
   pub takes_path:   bool,
}

/// Catalog listing with the overrides currently held by `registry`.
pub fn entries(registry: &Registry) -> Vec<CheckEntry> {
   Check::ALL
      .iter()
      .map(|&check| {
         let effective = match registry.resolve(check.name()) {
            None => check.default_kind().to_string(),
            Some(Override::Kind(kind)) => kind.to_string(),
            Some(Override::Hook(_)) => "hook".to_string(),
         };
         CheckEntry {
            name: check.name(),
            default_kind: check.default_kind(),
            effective,
            takes_path: check.takes_path(),
         }
      })
      .collect()
}

/// Executes the list command.
pub fn execute(registry: &Registry, json: bool) -> Result<()> {
   let entries = entries(registry);

   if json {
      println!("{}", serde_json::to_string_pretty(&entries)?);
      return Ok(());
   }

   let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
   for entry in &entries {
      let arg = if entry.takes_path { "path" } else { "value" };
      let kind = if entry.effective == entry.default_kind.as_str() {
         style(entry.effective.clone()).dim()
      } else {
         style(format!("{} (default {})", entry.effective, entry.default_kind)).yellow()
      };
      let name = format!("{:<width$}", entry.name);
      println!("  {}  {arg:<5}  {kind}", style(name).bold());
   }

   Ok(())
}
