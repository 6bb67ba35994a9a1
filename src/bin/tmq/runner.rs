//! Command runner for tmq.
//!
//! Loads each input, applies the operation and prints or writes back the
//! result. Failures are reported on stderr as `ERROR:` / `DETAILS:` /
//! `ACTION:` lines and turned into an exit code here; nothing below this
//! module exits the process.

use anyhow::Result;
use log::{info, warn};
use std::fmt::Display;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tmq::compare::compare;
use tmq::format::{render, render_table};
use tmq::{document, safety, Error, ErrorKind, Operation, Outcome, OutputFormat, Table};

use super::{split_positionals, Cli};

/// Exit codes for automation-friendly scripting
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_ERROR: i32 = 1; // Parse, navigation or operation failure
    pub const USAGE_ERROR: i32 = 2; // Invalid arguments or query syntax
    pub const SECURITY_ERROR: i32 = 3; // Unsafe file path
    pub const FILE_ERROR: i32 = 4; // Write-back failed
}

/// Options shared by every input.
struct Options {
    operation: Option<Operation>,
    format: OutputFormat,
    inplace: bool,
    dry_run: bool,
    validate: bool,
    compare: Option<PathBuf>,
    schema: Option<PathBuf>,
}

/// Where a document comes from.
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// A failed step, ready to be reported.
#[derive(Debug)]
struct Failure {
    code: i32,
    message: String,
    details: String,
    action: &'static str,
}

type Step<T = ()> = core::result::Result<T, Failure>;

impl Failure {
    fn new(code: i32, message: impl Into<String>, details: impl Display, action: &'static str) -> Self {
        Failure {
            code,
            message: message.into(),
            details: details.to_string(),
            action,
        }
    }

    fn print(&self) {
        eprintln!("ERROR: {}", self.message);
        if !self.details.is_empty() {
            eprintln!("DETAILS: {}", self.details);
        }
        if !self.action.is_empty() {
            eprintln!("ACTION: {}", self.action);
        }
    }
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Failure::new(
            exit_codes::RUNTIME_ERROR,
            "Failed to write output",
            e,
            "Check that stdout is writable",
        )
    }
}

/// Exit code for an error raised by a query or modification.
fn exit_code_for(err: &Error) -> i32 {
    match err.kind() {
        ErrorKind::Syntax => exit_codes::USAGE_ERROR,
        ErrorKind::Security => exit_codes::SECURITY_ERROR,
        ErrorKind::Navigation
        | ErrorKind::Parse
        | ErrorKind::Io
        | ErrorKind::Encode
        | ErrorKind::Unsupported => exit_codes::RUNTIME_ERROR,
    }
}

/// Main entry point: returns the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let (files, operation) = split_positionals(&cli.args);
    let opts = Options {
        operation,
        format: cli.output.into(),
        inplace: cli.inplace,
        dry_run: cli.dry_run,
        validate: cli.validate,
        compare: cli.compare,
        schema: cli.schema,
    };

    if opts.compare.is_some() && files.len() > 1 {
        eprintln!("Error: --compare takes a single input file");
        return Ok(exit_codes::USAGE_ERROR);
    }
    if opts.inplace && opts.operation.as_ref().map_or(true, |op| !op.is_mutation()) {
        warn!("--inplace has no effect without a set or delete operation");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = match files.as_slice() {
        [] => run_single(&opts, Input::Stdin, &mut out),
        [file] => run_single(&opts, Input::File(file.clone()), &mut out),
        _ => run_bulk(&opts, &files, &mut out)?,
    };

    out.flush()?;
    Ok(code)
}

/// Read and parse one input, applying the path safety gate to files.
fn load(input: &Input) -> Step<Table> {
    match input {
        Input::Stdin => document::parse_reader(io::stdin().lock()).map_err(|e| {
            Failure::new(
                exit_codes::RUNTIME_ERROR,
                "Failed to parse TOML from stdin",
                e,
                "Check TOML syntax in piped input",
            )
        }),
        Input::File(path) => {
            safety::validate_file_path(path).map_err(|e| {
                Failure::new(
                    exit_codes::SECURITY_ERROR,
                    format!("Invalid file path '{}'", path.display()),
                    e,
                    "Use safe file paths without directory traversal",
                )
            })?;
            document::parse_file(path).map_err(|e| {
                Failure::new(
                    exit_codes::RUNTIME_ERROR,
                    format!("Failed to parse TOML file '{}'", path.display()),
                    e,
                    "Check TOML syntax, file permissions, or file existence",
                )
            })
        }
    }
}

fn render_failure(e: Error, format: OutputFormat) -> Failure {
    Failure::new(
        exit_codes::RUNTIME_ERROR,
        format!("Failed to convert to {}", format),
        e,
        "Choose another output format",
    )
}

fn write_table<W: Write>(out: &mut W, table: &Table, format: OutputFormat) -> Step {
    let text = render_table(table, format).map_err(|e| render_failure(e, format))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

fn operation_failure(op: &Operation, e: Error) -> Failure {
    let (message, action) = match op {
        Operation::Query(expr) => (
            format!("Query execution failed for '{}'", expr),
            "Check query path exists in TOML data",
        ),
        Operation::Set(_) => (
            "Set operation failed".to_string(),
            "Check operation syntax and data types",
        ),
        Operation::Delete(_) => (
            "Delete operation failed".to_string(),
            "Check operation syntax and path exists",
        ),
    };
    Failure::new(exit_code_for(&e), message, e, action)
}

fn write_back(path: &Path, doc: &Table) -> Step {
    document::write_file(path, doc).map_err(|e| {
        Failure::new(
            exit_codes::FILE_ERROR,
            format!("Failed to write file '{}'", path.display()),
            e,
            "Check file permissions and disk space",
        )
    })
}

fn run_single<W: Write>(opts: &Options, input: Input, out: &mut W) -> i32 {
    match process_single(opts, &input, out) {
        Ok(code) => code,
        Err(failure) => {
            let _ = out.flush();
            failure.print();
            failure.code
        }
    }
}

fn process_single<W: Write>(opts: &Options, input: &Input, out: &mut W) -> Step<i32> {
    let mut doc = load(input)?;

    if opts.validate {
        check_schema(opts)?;
        writeln!(out, "✓ TOML file is valid")?;
        return Ok(exit_codes::SUCCESS);
    }

    if let Some(other) = &opts.compare {
        return compare_with(&doc, other, out);
    }

    let Some(op) = &opts.operation else {
        write_table(out, &doc, opts.format)?;
        return Ok(exit_codes::SUCCESS);
    };

    if op.is_mutation() && opts.dry_run {
        let preposition = if matches!(op, Operation::Delete(_)) { "from" } else { "in" };
        writeln!(
            out,
            "DRY RUN: Would {} {} {} {}",
            op.verb(),
            op.expression(),
            preposition,
            input.name()
        )?;
    }

    match op.apply(&mut doc).map_err(|e| operation_failure(op, e))? {
        Outcome::Selected(value) => {
            let text = render(&value, opts.format).map_err(|e| render_failure(e, opts.format))?;
            writeln!(out, "{}", text)?;
        }
        Outcome::Modified if opts.dry_run => {
            writeln!(out, "Result:")?;
            write_table(out, &doc, opts.format)?;
        }
        Outcome::Modified => match input {
            Input::File(path) if opts.inplace => {
                write_back(path, &doc)?;
                info!("updated {}", path.display());
            }
            _ => {
                if opts.inplace {
                    warn!("--inplace ignored when reading from stdin");
                }
                write_table(out, &doc, opts.format)?;
            }
        },
    }

    Ok(exit_codes::SUCCESS)
}

fn check_schema(opts: &Options) -> Step {
    match &opts.schema {
        Some(schema) => Err(Failure::new(
            exit_codes::RUNTIME_ERROR,
            format!("Cannot validate against schema '{}'", schema.display()),
            Error::Unsupported("schema validation"),
            "Run --validate without --schema",
        )),
        None => Ok(()),
    }
}

fn compare_with<W: Write>(doc: &Table, other: &Path, out: &mut W) -> Step<i32> {
    let second = load(&Input::File(other.to_path_buf()))?;
    let diffs = compare(doc, &second);

    if diffs.is_empty() {
        writeln!(out, "✓ Files are identical")?;
        return Ok(exit_codes::SUCCESS);
    }

    writeln!(out, "✗ Files differ:")?;
    for diff in &diffs {
        writeln!(out, "  {}", diff)?;
    }
    Ok(exit_codes::RUNTIME_ERROR)
}

/// Process several files one after another. A failing file is reported and
/// skipped; the exit code is 1 if any file failed.
fn run_bulk<W: Write>(opts: &Options, files: &[PathBuf], out: &mut W) -> Result<i32> {
    let mut had_errors = false;

    for path in files {
        info!("Processing: {}", path.display());
        if let Err(mut failure) = process_bulk_file(opts, path, out) {
            out.flush()?;
            failure.action = "Skipping file";
            failure.print();
            had_errors = true;
        }
    }

    Ok(if had_errors {
        exit_codes::RUNTIME_ERROR
    } else {
        exit_codes::SUCCESS
    })
}

fn process_bulk_file<W: Write>(opts: &Options, path: &Path, out: &mut W) -> Step {
    let name = path.display();
    let mut doc = load(&Input::File(path.to_path_buf()))?;

    if opts.validate {
        check_schema(opts)?;
        writeln!(out, "✓ {}: TOML file is valid", name)?;
        return Ok(());
    }

    let Some(op) = &opts.operation else {
        let text = render_table(&doc, opts.format).map_err(|e| render_failure(e, opts.format))?;
        writeln!(out, "{}: {}", name, text)?;
        return Ok(());
    };

    if !op.is_mutation() {
        if let Outcome::Selected(value) = op.apply(&mut doc).map_err(|e| operation_failure(op, e))? {
            let text = render(&value, opts.format).map_err(|e| render_failure(e, opts.format))?;
            writeln!(out, "{}: {}", name, text)?;
        }
        return Ok(());
    }

    if opts.dry_run {
        writeln!(out, "{}: DRY RUN: Would {} {}", name, op.verb(), op.expression())?;
        op.apply(&mut doc).map_err(|e| operation_failure(op, e))?;
        let text = render_table(&doc, opts.format).map_err(|e| render_failure(e, opts.format))?;
        writeln!(out, "{}: Result: {}", name, text)?;
        return Ok(());
    }

    if !opts.inplace {
        return Err(Failure::new(
            exit_codes::USAGE_ERROR,
            format!("Operation failed on '{}'", name),
            format!("bulk {} operations require -i (in-place) flag", op.verb()),
            "Skipping file",
        ));
    }

    op.apply(&mut doc).map_err(|e| operation_failure(op, e))?;
    write_back(path, &doc)?;
    writeln!(out, "{}: updated", name)?;
    Ok(())
}
