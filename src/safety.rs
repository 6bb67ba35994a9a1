//! File path checks applied before a file is opened.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Largest file that will be read (100 MB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Absolute path prefixes that are never read or written.
const RESTRICTED_PREFIXES: &[&str] = &["/etc/", "/usr/", "/var/", "/proc/", "/sys/", "/dev/"];

/// Reject paths that traverse upwards, point into system directories, or
/// name a file larger than [`MAX_FILE_SIZE`].
///
/// A path that does not exist passes; opening it fails later.
pub fn validate_file_path(path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    let reject = |reason: &'static str| -> Result<()> {
        Err(Error::Security {
            path: path.to_path_buf(),
            reason,
        })
    };

    if text.contains("..") {
        return reject("directory traversal not allowed");
    }

    if RESTRICTED_PREFIXES.iter().any(|p| text.starts_with(p)) {
        return reject("access to system directories not allowed");
    }

    if let Ok(meta) = fs::metadata(path) {
        if meta.len() > MAX_FILE_SIZE {
            return reject("file too large (max 100MB)");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(path: &str) -> Option<&'static str> {
        match validate_file_path(Path::new(path)) {
            Ok(()) => None,
            Err(Error::Security { reason, .. }) => Some(reason),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_traversal() {
        assert_eq!(
            reason("../../../etc/passwd"),
            Some("directory traversal not allowed")
        );
        assert_eq!(reason("a/../b.toml"), Some("directory traversal not allowed"));
    }

    #[test]
    fn test_system_directories() {
        for path in ["/etc/passwd", "/usr/lib/x.toml", "/var/x", "/proc/1/status", "/sys/x", "/dev/null"] {
            assert_eq!(
                reason(path),
                Some("access to system directories not allowed"),
                "{path}"
            );
        }
    }

    #[test]
    fn test_allowed() {
        assert_eq!(reason("config.toml"), None);
        assert_eq!(reason("./config.toml"), None);
        assert_eq!(reason("/home/user/config.toml"), None);
        assert_eq!(reason("nonexistent.toml"), None);
        assert_eq!(reason("/etcetera/x.toml"), None);
    }

    #[test]
    fn test_existing_small_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.toml");
        fs::write(&path, "a = 1\n").unwrap();
        assert!(validate_file_path(&path).is_ok());
    }

    #[test]
    fn test_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.toml");
        let file = fs::File::create(&path).unwrap();

        file.set_len(MAX_FILE_SIZE).unwrap();
        assert!(validate_file_path(&path).is_ok());

        file.set_len(MAX_FILE_SIZE + 1).unwrap();
        match validate_file_path(&path) {
            Err(Error::Security { reason, .. }) => assert_eq!(reason, "file too large (max 100MB)"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
