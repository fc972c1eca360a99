use std::path::PathBuf;

use clap::{Parser, Subcommand};
use precheck::{
   Config, Expect, Result,
   cmd::{self, value::ValueArgs},
   registry,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the precheck application
#[derive(Parser)]
#[command(name = "precheck")]
#[command(about = "Run precondition checks from the shell")]
#[command(version)]
struct Cli {
   #[arg(long, global = true, help = "TOML file with failure-kind overrides")]
   config: Option<PathBuf>,

   #[command(subcommand)]
   command: Cmd,
}

/// Available subcommands for precheck
#[derive(Subcommand)]
enum Cmd {
   #[command(about = "Check a JSON value (bare words are strings)")]
   Value {
      #[arg(help = "Check name, e.g. is_numeric or isNumeric")]
      check: String,

      #[arg(help = "Value to check, as JSON", allow_hyphen_values = true)]
      value: String,

      #[arg(long, allow_hyphen_values = true, help = "Bound for range checks")]
      bound: Option<String>,

      #[arg(long, help = "JSON array or object for membership checks")]
      array: Option<String>,
   },

   #[command(about = "Check a filesystem path")]
   Path {
      #[arg(help = "Check name, e.g. is_readable_file")]
      check: String,

      #[arg(help = "Path to check")]
      path: PathBuf,
   },

   #[command(about = "List every check and the failure kind it raises")]
   List {
      #[arg(long, help = "JSON output")]
      json: bool,
   },
}

fn main() {
   tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
      .with_writer(std::io::stderr)
      .init();

   let cli = Cli::parse();
   if let Err(err) = run(cli) {
      eprintln!("{err}");
      std::process::exit(err.exit_code());
   }
}

fn run(cli: Cli) -> Result<()> {
   let config = match cli.config.as_deref() {
      Some(path) => Config::load_from(path)?,
      None => Config::load()?,
   };
   let registry = registry::global();
   registry.apply_config(&config)?;
   let expect = Expect::new(registry);

   match cli.command {
      Cmd::Value { check, value, bound, array } => {
         cmd::value::execute(expect, &ValueArgs { check, value, bound, array })
      },
      Cmd::Path { check, path } => cmd::path::execute(expect, &check, &path),
      Cmd::List { json } => cmd::list::execute(registry, json),
   }
}
