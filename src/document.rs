//! Reading and writing TOML documents.
//!
//! Parsing and encoding are delegated to the `toml` crate; this module only
//! converts between its tables and [`Table`] and attaches file context to
//! I/O failures.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::value::{table_from_toml, table_to_toml, Table};

/// Parse TOML text into a document.
///
/// Empty input is an empty document.
pub fn parse_str(text: &str) -> Result<Table> {
    let table: toml::Table = toml::from_str(text)?;
    Ok(table_from_toml(table))
}

/// Read all of `reader` and parse it as TOML.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Table> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io("failed to read input", e))?;
    parse_str(&text)
}

/// Read and parse a TOML file.
pub fn parse_file(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to open file {}", path.display()), e))?;
    debug!("read {} bytes from {}", text.len(), path.display());
    parse_str(&text)
}

/// Encode a document as TOML text.
pub fn to_toml_string(table: &Table) -> Result<String> {
    toml::to_string(&table_to_toml(table)).map_err(|e| Error::encode("TOML", e))
}

/// Encode a document and overwrite `path` with it.
///
/// Not atomic: a failure while writing can leave a truncated file.
pub fn write_file(path: &Path, table: &Table) -> Result<()> {
    let text = to_toml_string(table)?;
    fs::write(path, text.as_bytes())
        .map_err(|e| Error::io(format!("failed to write file {}", path.display()), e))?;
    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_parse_str() {
        let doc = parse_str("[project]\nname = \"test\"\nversion = \"1.0.0\"\n").unwrap();
        let project = doc["project"].as_table().unwrap();
        assert_eq!(project["name"], Value::from("test"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_str("key = ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse TOML"));
    }

    #[test]
    fn test_parse_reader() {
        let doc = parse_reader("a = 1\n".as_bytes()).unwrap();
        assert_eq!(doc["a"], Value::Integer(1));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_file(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_round_trip_keeps_types_and_order() {
        let text = "title = \"x\"\nwhen = 1979-05-27T07:32:00Z\nratio = 0.5\n\n[server]\nport = 8080\n";
        let doc = parse_str(text).unwrap();
        let encoded = to_toml_string(&doc).unwrap();
        let again = parse_str(&encoded).unwrap();
        assert_eq!(doc, again);
        assert!(encoded.find("title").unwrap() < encoded.find("ratio").unwrap());
        assert!(matches!(again["when"], Value::Datetime(_)));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");
        let doc = parse_str("[a]\nb = true\n").unwrap();
        write_file(&path, &doc).unwrap();
        assert_eq!(parse_file(&path).unwrap(), doc);
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.toml");
        let err = write_file(&path, &parse_str("a = 1\n").unwrap()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("failed to write file "));
    }
}
