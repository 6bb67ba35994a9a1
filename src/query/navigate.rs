//! Walking a document tree along a [`Path`].
//!
//! `get` only ever borrows the tree. `set` creates missing intermediate
//! tables as it goes; `delete` never creates anything and fails on the
//! first missing key instead.

use indexmap::map::Entry;
use log::debug;

use super::path::Path;
use crate::error::{Error, Result};
use crate::value::{Table, Value};

/// A borrowed node of a document: either the root table or a value below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// The document root.
    Root(&'a Table),
    /// A value reached through at least one key.
    Value(&'a Value),
}

impl<'a> Node<'a> {
    /// The table behind this node, if it is one.
    pub fn as_table(&self) -> Option<&'a Table> {
        match *self {
            Node::Root(t) | Node::Value(Value::Table(t)) => Some(t),
            Node::Value(_) => None,
        }
    }

    /// Get the type name of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Root(_) => "table",
            Node::Value(v) => v.type_name(),
        }
    }

    /// Copy the node out of the document.
    pub fn to_value(&self) -> Value {
        match *self {
            Node::Root(t) => Value::Table(t.clone()),
            Node::Value(v) => v.clone(),
        }
    }
}

fn not_navigable(value: &Value, path: &Path, depth: usize) -> Error {
    Error::NotNavigable {
        type_name: value.type_name(),
        path: path.dotted_prefix(depth),
    }
}

/// Look up the node at `path`.
///
/// The root path returns the root itself.
pub fn get<'a>(root: &'a Table, path: &Path) -> Result<Node<'a>> {
    let mut current = Node::Root(root);

    for (i, segment) in path.segments().iter().enumerate() {
        let table = match current {
            Node::Root(t) | Node::Value(Value::Table(t)) => t,
            Node::Value(other) => return Err(not_navigable(other, path, i + 1)),
        };
        let next = table.get(segment).ok_or_else(|| Error::KeyNotFound {
            key: segment.clone(),
        })?;
        current = Node::Value(next);
    }

    Ok(current)
}

/// Assign `value` at `path`, creating missing intermediate tables.
///
/// The final key is overwritten whatever it held before.
pub fn set(root: &mut Table, path: &Path, value: Value) -> Result<()> {
    let (last, parents) = path.segments().split_last().ok_or(Error::EmptyPath)?;

    let mut current = root;
    for (i, segment) in parents.iter().enumerate() {
        let next = match current.entry(segment.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                debug!("creating table at {}", path.dotted_prefix(i + 1));
                e.insert(Value::table())
            }
        };
        current = match next {
            Value::Table(t) => t,
            other => return Err(not_navigable(other, path, i + 1)),
        };
    }

    debug!("setting {} to {}", path, value.type_name());
    current.insert(last.clone(), value);
    Ok(())
}

/// Remove the key at `path` and return its value.
///
/// Every intermediate table must already exist.
pub fn delete(root: &mut Table, path: &Path) -> Result<Value> {
    let (last, parents) = path.segments().split_last().ok_or(Error::EmptyPath)?;

    let mut current = root;
    for (i, segment) in parents.iter().enumerate() {
        current = match current.get_mut(segment) {
            Some(Value::Table(t)) => t,
            Some(other) => return Err(not_navigable(other, path, i + 1)),
            None => {
                return Err(Error::PathNotFound {
                    path: path.dotted_prefix(i + 1),
                })
            }
        };
    }

    let removed = current
        .shift_remove(last)
        .ok_or_else(|| Error::KeyNotFound { key: last.clone() })?;
    debug!("deleted {} ({})", path, removed.type_name());
    Ok(removed)
}
