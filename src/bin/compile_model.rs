//! CLI: Compile the layout model of a node type from a JSON type registry.
//!
//! Usage: `compile_model [OPTIONS] <registry.json> <NodeType>`
//! Example: compile_model --data live/mix.json types.json Mix
//!
//! Set RUST_LOG=nodemodel=trace for TRACE-level span enter/exit and events.

use clap::{Parser, ValueEnum};
use nodemodel::ModelCache;
use nodemodel::registry_io::{load_live_data, load_registry, save_model};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Output format for the compiled model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  Outline,
  Json,
}

impl Format {
  fn from_env(value: &str) -> Option<Self> {
    Format::from_str(value, true).ok()
  }
}

/// Compile the layout model of a node type.
#[derive(Parser, Debug)]
#[command(name = "compile_model")]
#[command(
  after_help = r#"Environment variables (override flags when set):
  NODEMODEL_REGISTRY   Path to the JSON type registry.
  NODEMODEL_FORMAT     Output format: outline or json.

Examples:
  compile_model types.json Mix
  compile_model --data mix.json --format json --output out/Mix.model.json types.json Mix"#
)]
struct Args {
  /// JSON file with the node's live data. Declared defaults are used when omitted.
  #[arg(long, value_name = "FILE")]
  data: Option<PathBuf>,

  /// Output format. Overridden by NODEMODEL_FORMAT if set.
  #[arg(long, value_enum, default_value_t = Format::Outline)]
  format: Format,

  /// Also write the model as JSON to this file.
  #[arg(long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Path to the JSON type registry. Overridden by NODEMODEL_REGISTRY if set.
  #[arg(value_name = "registry.json")]
  registry: PathBuf,

  /// Node type to compile.
  #[arg(value_name = "NodeType")]
  node_type: String,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Env vars override flags.
  let registry_path = env::var("NODEMODEL_REGISTRY")
    .ok()
    .map(PathBuf::from)
    .unwrap_or_else(|| args.registry.clone());
  let format = env::var("NODEMODEL_FORMAT")
    .ok()
    .and_then(|v| Format::from_env(&v))
    .unwrap_or(args.format);

  info!(registry = %registry_path.display(), node_type = %args.node_type, ?format, "options (env or flags)");

  let registry = match load_registry(&registry_path) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Error reading {}: {}", registry_path.display(), e);
      process::exit(1);
    }
  };

  let data = match &args.data {
    Some(path) => match load_live_data(path) {
      Ok(v) => v,
      Err(e) => {
        eprintln!("Error reading {}: {}", path.display(), e);
        process::exit(1);
      }
    },
    None => serde_json::Value::Null,
  };

  let cache = ModelCache::new();
  let model = match cache.model_for(&registry, &args.node_type, &data) {
    Ok(m) => m,
    Err(e) => {
      eprintln!("Error compiling {}: {}", args.node_type, e);
      process::exit(1);
    }
  };

  if let Some(path) = &args.output {
    if let Err(e) = save_model(path, &model) {
      eprintln!("Error writing {}: {}", path.display(), e);
      process::exit(1);
    }
  }

  match format {
    Format::Outline => print!("{}", model),
    Format::Json => match serde_json::to_string_pretty(model.as_ref()) {
      Ok(json) => println!("{}", json),
      Err(e) => {
        eprintln!("Error encoding model: {}", e);
        process::exit(1);
      }
    },
  }
}
