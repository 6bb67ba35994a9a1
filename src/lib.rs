//! # tmq
//!
//! Query and modify TOML documents with dotted paths, like jq does for JSON.
//!
//! ## Quick Start
//!
//! ```
//! use tmq::format::{render_table, OutputFormat};
//! use tmq::query::{query, set_expression};
//! use tmq::{document, Value};
//!
//! let mut doc = document::parse_str("[project]\nversion = \"1.0.0\"\n").unwrap();
//!
//! // Read a value
//! assert_eq!(query(".project.version", &doc).unwrap(), Value::from("1.0.0"));
//!
//! // Missing tables are created on assignment
//! set_expression(".database.port = 5432", &mut doc).unwrap();
//! assert_eq!(query(".database.port", &doc).unwrap(), Value::Integer(5432));
//!
//! // Convert
//! let json = render_table(&doc, OutputFormat::Json).unwrap();
//! assert!(json.contains("\"port\": 5432"));
//! ```
//!
//! ## Modules
//!
//! - [`query`] - path expressions, literals, navigation and the set/delete syntax
//! - [`value`] - the owned document tree
//! - [`document`] - TOML parsing and encoding
//! - [`format`] - TOML, JSON and YAML output
//! - [`safety`] - file path checks
//! - [`compare`] - structural diff of two documents
//!
//! ## Features
//!
//! - `cli` (default) - build the `tmq` binary

pub mod compare;
pub mod document;
pub mod error;
pub mod format;
pub mod query;
pub mod safety;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use format::OutputFormat;
pub use query::{Operation, Outcome, Path};
pub use value::{Table, Value};
