//! tmq - query and modify TOML from the command line.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tmq::{Operation, OutputFormat};

mod runner;

const AFTER_HELP: &str = "\
Operations:
  '.key'                 Query a value
  '.key = \"value\"'       Set a value (missing tables are created)
  'del(.key)'            Delete a key

Exit codes:
  0    Success
  1    Parse error or runtime error
  2    Usage error or invalid query syntax
  3    Security error (unsafe file path)
  4    File write error

Examples:
  tmq config.toml '.project.version'
  cat config.toml | tmq '.database.host'
  tmq config.toml -o json
  tmq config.toml '.version = \"2.0\"' -i
  tmq config.toml 'del(.old_field)' --dry-run
  tmq --validate config.toml
  tmq --compare other.toml config.toml";

#[derive(Debug, Parser)]
#[command(name = "tmq")]
#[command(about = "TOML query tool (like jq for TOML)", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// TOML files (stdin if none), optionally followed by an operation
    #[arg(value_name = "FILE|OPERATION")]
    args: Vec<String>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        default_value = "toml",
        env = "TMQ_OUTPUT",
        ignore_case = true
    )]
    output: FormatArg,

    /// Modify files in place (requires a file argument)
    #[arg(short, long)]
    inplace: bool,

    /// Preview a set or delete without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Only check that the input is valid TOML
    #[arg(long)]
    validate: bool,

    /// Compare the input with another TOML file
    #[arg(long, value_name = "FILE")]
    compare: Option<PathBuf>,

    /// Validate against a schema file (not implemented)
    #[arg(long, value_name = "FILE")]
    schema: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// TOML (default)
    Toml,
    /// Pretty-printed JSON
    Json,
    /// YAML
    #[value(alias = "yml")]
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toml => OutputFormat::Toml,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Split positionals into files and an optional trailing operation.
///
/// The last positional is the operation if it looks like one; otherwise
/// every positional is a file.
fn split_positionals(args: &[String]) -> (Vec<PathBuf>, Option<Operation>) {
    match args.split_last() {
        Some((last, rest)) => match Operation::classify(last) {
            Some(op) => (rest.iter().map(PathBuf::from).collect(), Some(op)),
            None => (args.iter().map(PathBuf::from).collect(), None),
        },
        None => (Vec::new(), None),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("TMQ_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let code = runner::run(cli)?;
    std::process::exit(code);
}
