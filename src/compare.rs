//! Structural comparison of two documents.

use core::fmt;

use crate::query::Path;
use crate::value::{Table, Value};

/// One difference between two documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    /// Present only in the second document.
    Added {
        /// Location of the key
        path: Path,
    },
    /// Present only in the first document.
    Removed {
        /// Location of the key
        path: Path,
    },
    /// Present in both with different values.
    Changed {
        /// Location of the key
        path: Path,
        /// Value in the first document
        left: Value,
        /// Value in the second document
        right: Value,
    },
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::Added { path } => write!(f, "+ {}", path),
            Difference::Removed { path } => write!(f, "- {}", path),
            Difference::Changed { path, left, right } => write!(
                f,
                "~ {}: {} -> {}",
                path,
                toml::Value::from(left),
                toml::Value::from(right)
            ),
        }
    }
}

/// List the differences between `left` and `right`.
///
/// Tables are compared key by key; any other pair of values is compared as
/// a whole, so a changed array element reports the whole array. Key order
/// does not matter.
pub fn compare(left: &Table, right: &Table) -> Vec<Difference> {
    let mut out = Vec::new();
    compare_tables(&Path::root(), left, right, &mut out);
    out
}

fn compare_tables(at: &Path, left: &Table, right: &Table, out: &mut Vec<Difference>) {
    for (key, l) in left {
        let path = at.child(key);
        match (l, right.get(key)) {
            (_, None) => out.push(Difference::Removed { path }),
            (Value::Table(lt), Some(Value::Table(rt))) => compare_tables(&path, lt, rt, out),
            (l, Some(r)) if l != r => out.push(Difference::Changed {
                path,
                left: l.clone(),
                right: r.clone(),
            }),
            _ => {}
        }
    }
    for key in right.keys().filter(|k| !left.contains_key(*k)) {
        out.push(Difference::Added {
            path: at.child(key),
        });
    }
}
