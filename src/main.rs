use anyhow::Result;
use argtoken::{Pipeline, Schema, report, schema};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Tokenize command-line arguments against an option schema
#[derive(Debug, Parser)]
#[command(name = "argtoken", version)]
struct Cli {
  /// Schema file (defaults to the nearest Optfile)
  #[arg(short = 's', long, value_name = "FILE")]
  schema: Option<PathBuf>,

  /// Extra option spec, e.g. "-v, --verbose" or "--tags=,"
  #[arg(short = 'O', long = "option", value_name = "SPEC")]
  options: Vec<String>,

  /// Lex a bare `--` like any other argument
  #[arg(long)]
  no_dash_dash: bool,

  /// Exit with status 1 when any error was collected
  #[arg(long)]
  strict: bool,

  /// Print tokens without ANSI colours
  #[arg(long)]
  no_color: bool,

  /// Log pipeline decisions to stderr
  #[arg(short, long)]
  verbose: bool,

  /// Arguments to tokenize
  #[arg(last = true, value_name = "ARGS")]
  args: Vec<String>,
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn load_schema(cli: &Cli) -> Result<Schema> {
  let mut schema = match &cli.schema {
    Some(path) => Schema::load(path)?,
    None => match schema::find_schema() {
      Ok(path) => {
        tracing::debug!(path = %path.display(), "using schema file");
        Schema::load(&path)?
      }
      Err(err) => {
        tracing::debug!("{}", err);
        Schema::new()
      }
    },
  };
  for spec in &cli.options {
    schema.parse_spec(spec)?;
  }
  if schema.is_empty() {
    tracing::debug!("no options configured, every option will be reported as unknown");
  } else {
    tracing::debug!(options = schema.len(), "loaded schema");
  }
  Ok(schema)
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let schema = load_schema(&cli)?;
  let pipeline = Pipeline::new().with_dash_dash(!cli.no_dash_dash);
  let result = pipeline.run(&cli.args, &schema);

  report::print(&result, !cli.no_color)?;

  if cli.strict && result.has_errors() {
    std::process::exit(1);
  }

  Ok(())
}
