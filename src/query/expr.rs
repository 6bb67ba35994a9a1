//! Query, set and delete expressions.
//!
//! These are the three entry points the command line exposes:
//!
//! - `.a.b` reads a value,
//! - `.a.b = value` assigns a literal (see [`parse_literal`]),
//! - `del(.a.b)` removes a key.

use log::debug;

use super::literal::parse_literal;
use super::navigate;
use super::path::Path;
use crate::error::{Error, Result};
use crate::value::{Table, Value};

/// Evaluate a path expression and copy the selected value out of `root`.
pub fn query(path: &str, root: &Table) -> Result<Value> {
    let path = Path::parse(path)?;
    Ok(navigate::get(root, &path)?.to_value())
}

/// Apply a set expression such as `.database.port = 5432`.
///
/// The expression is split at the first `=`; both sides are trimmed.
pub fn set_expression(expr: &str, root: &mut Table) -> Result<()> {
    let (lhs, rhs) = expr.split_once('=').ok_or_else(|| Error::InvalidSyntax {
        what: "set",
        expr: expr.to_string(),
        expected: ".key = value",
    })?;

    let path = Path::parse(lhs.trim())?;
    let value = parse_literal(rhs.trim());
    navigate::set(root, &path, value)
}

/// Apply a delete expression such as `del(.old_field)` and return the
/// removed value.
pub fn delete_expression(expr: &str, root: &mut Table) -> Result<Value> {
    let inner = expr
        .strip_prefix("del(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| Error::InvalidSyntax {
            what: "delete",
            expr: expr.to_string(),
            expected: "del(.key)",
        })?;

    let path = Path::parse(inner)?;
    navigate::delete(root, &path)
}

/// An operation given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Read the value at a path: `.a.b`
    Query(String),
    /// Assign a value: `.a.b = 1`
    Set(String),
    /// Remove a key: `del(.a.b)`
    Delete(String),
}

/// What applying an [`Operation`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A query selected this value.
    Selected(Value),
    /// The document was modified in place.
    Modified,
}

impl Operation {
    /// Decide whether a command-line argument is an operation.
    ///
    /// Anything containing `=` is a set, a `del(` prefix is a delete, and
    /// text starting with `.` or containing brackets is a query. Everything
    /// else is taken to be a file name and yields `None`.
    pub fn classify(arg: &str) -> Option<Operation> {
        if arg.contains('=') {
            Some(Operation::Set(arg.to_string()))
        } else if arg.starts_with("del(") {
            Some(Operation::Delete(arg.to_string()))
        } else if arg.starts_with('.') || arg.contains('[') || arg.contains(']') {
            Some(Operation::Query(arg.to_string()))
        } else {
            None
        }
    }

    /// The expression text as given.
    pub fn expression(&self) -> &str {
        match self {
            Operation::Query(e) | Operation::Set(e) | Operation::Delete(e) => e,
        }
    }

    /// Short name used in messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Query(_) => "query",
            Operation::Set(_) => "set",
            Operation::Delete(_) => "delete",
        }
    }

    /// True for set and delete.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Query(_))
    }

    /// Run the operation against a document.
    pub fn apply(&self, root: &mut Table) -> Result<Outcome> {
        debug!("applying {} {:?}", self.verb(), self.expression());
        match self {
            Operation::Query(path) => query(path, root).map(Outcome::Selected),
            Operation::Set(expr) => set_expression(expr, root).map(|()| Outcome::Modified),
            Operation::Delete(expr) => delete_expression(expr, root).map(|_| Outcome::Modified),
        }
    }
}
