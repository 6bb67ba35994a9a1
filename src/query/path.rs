//! Dotted path expressions.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// A parsed dotted path such as `.project.version`.
///
/// Segments are the raw text between dots. There is no escaping, and no
/// segment is ever treated as an array index or wildcard. Empty segments
/// (from `..` or a trailing dot) are kept and address the empty-string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a dotted path.
    ///
    /// The empty string is rejected; `"."` is the root path.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::EmptyPath);
        }

        let rest = input.strip_prefix('.').unwrap_or(input);
        if rest.is_empty() {
            return Ok(Path::root());
        }

        Ok(Path {
            segments: rest.split('.').map(str::to_string).collect(),
        })
    }

    /// The zero-segment path addressing the whole document.
    pub fn root() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Build a path from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Path { segments }
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alias for [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Canonical string form: `.a.b`, or `.` for the root.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The first `n` segments joined with dots, without a leading dot.
    pub(crate) fn dotted_prefix(&self, n: usize) -> String {
        self.segments[..n.min(self.segments.len())].join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(".");
        }
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}
