//! Output formats.

use core::fmt;

use crate::document;
use crate::error::{Error, Result};
use crate::query::Node;
use crate::value::{Table, Value};

/// Format used to print results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// TOML (default)
    #[default]
    Toml,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Lowercase name of the format.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Toml => "toml",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a whole document.
pub fn render_table(table: &Table, format: OutputFormat) -> Result<String> {
    render_node(Node::Root(table), format)
}

/// Render a single value.
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    render_node(Node::Value(value), format)
}

/// Render a document node without a trailing newline.
///
/// In TOML, tables print as documents, strings print raw and everything
/// else prints as an inline TOML value.
pub fn render_node(node: Node<'_>, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Toml => match node {
            Node::Root(t) | Node::Value(Value::Table(t)) => document::to_toml_string(t)?,
            Node::Value(Value::String(s)) => s.clone(),
            Node::Value(v) => toml::Value::from(v).to_string(),
        },
        OutputFormat::Json => match node {
            Node::Root(t) => serde_json::to_string_pretty(t),
            Node::Value(v) => serde_json::to_string_pretty(v),
        }
        .map_err(|e| Error::encode("JSON", e))?,
        OutputFormat::Yaml => match node {
            Node::Root(t) => serde_yaml::to_string(t),
            Node::Value(v) => serde_yaml::to_string(v),
        }
        .map_err(|e| Error::encode("YAML", e))?,
    };
    Ok(text.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        document::parse_str("[project]\nname = \"test\"\nversion = \"1.0.0\"\ntags = [\"a\", \"b\"]\n")
            .unwrap()
    }

    #[test]
    fn test_names() {
        assert_eq!(OutputFormat::default(), OutputFormat::Toml);
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.name(), "yaml");
    }

    #[test]
    fn test_json() {
        let out = render_table(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["project"]["version"], "1.0.0");
        assert!(out.contains("\n  \"project\": {"));
    }

    #[test]
    fn test_yaml() {
        let out = render_table(&sample(), OutputFormat::Yaml).unwrap();
        assert!(out.starts_with("project:\n  name: test\n"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_toml_document() {
        let out = render_table(&sample(), OutputFormat::Toml).unwrap();
        assert!(out.starts_with("[project]"));
        assert_eq!(document::parse_str(&out).unwrap(), sample());
    }

    #[test]
    fn test_toml_scalars() {
        assert_eq!(render(&Value::from("1.0.0"), OutputFormat::Toml).unwrap(), "1.0.0");
        assert_eq!(render(&Value::Integer(5432), OutputFormat::Toml).unwrap(), "5432");
        assert_eq!(render(&Value::Boolean(true), OutputFormat::Toml).unwrap(), "true");
        assert_eq!(
            render(&Value::from(vec!["a", "b"]), OutputFormat::Toml).unwrap(),
            "[\"a\", \"b\"]"
        );
    }

    #[test]
    fn test_json_scalar() {
        assert_eq!(render(&Value::from("x"), OutputFormat::Json).unwrap(), "\"x\"");
    }
}
