//! Dotted-path queries and modifications for TOML documents.
//!
//! # Supported Syntax
//!
//! | Expression | Meaning |
//! |------------|---------|
//! | `.` | The whole document |
//! | `.foo` | Key "foo" of the root table |
//! | `.foo.bar` | Nested key access |
//! | `foo.bar` | Same as `.foo.bar` (the leading dot is optional) |
//! | `.foo = "text"` | Set a quoted string (single or double quotes) |
//! | `.foo = 42` | Set an integer (`1e3` is also an integer) |
//! | `.foo = 4.2` | Set a float |
//! | `.foo = true` | Set a boolean |
//! | `.foo = word` | Set a bare word as a string |
//! | `del(.foo)` | Delete a key |
//!
//! Arrays cannot be indexed: `.items.0` fails because `items` is not a
//! table. Keys containing dots cannot be addressed.
//!
//! # Example
//!
//! ```
//! use tmq::query::{delete_expression, query, set_expression};
//! use tmq::{document, Value};
//!
//! let mut doc = document::parse_str("[project]\nname = \"test\"\n").unwrap();
//!
//! set_expression(".project.version = \"1.0.0\"", &mut doc).unwrap();
//! assert_eq!(query(".project.version", &doc).unwrap(), Value::from("1.0.0"));
//!
//! delete_expression("del(.project.name)", &mut doc).unwrap();
//! assert!(query(".project.name", &doc).is_err());
//! ```

mod expr;
mod literal;
pub mod navigate;
mod path;

pub use expr::{delete_expression, query, set_expression, Operation, Outcome};
pub use literal::parse_literal;
pub use navigate::Node;
pub use path::Path;
