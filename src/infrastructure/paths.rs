//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! normally resolves to the directory Zellij was started from (usually the
//! user's home directory).

use crate::domain::error::Result;
use std::path::{Path, PathBuf};

/// Returns the data directory used for trace files.
///
/// ```
/// use docnav::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/docnav"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("docnav")
}

/// Creates `dir` and its parents if missing, returning it.
///
/// # Errors
///
/// Returns [`DocnavError::Io`](crate::domain::DocnavError::Io) if the directory
/// cannot be created, typically because `FullHdAccess` was not granted.
pub fn ensure_dir(dir: &Path) -> Result<&Path> {
    std::fs::create_dir_all(dir)?;
    Ok(dir)
}

/// Maps a `~`-prefixed path onto the sandbox's `/host` mount.
///
/// ```
/// use docnav::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/docnav.toml"), "/etc/docnav.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("zellij").join("docnav");
        assert_eq!(ensure_dir(&nested).unwrap(), nested.as_path());
        assert!(nested.is_dir());
        // Existing directories are fine.
        assert!(ensure_dir(&nested).is_ok());
    }

    #[test]
    fn ensure_dir_reports_io_errors() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("not-a-dir");
        std::fs::write(&file, b"").unwrap();
        let err = ensure_dir(&file.join("child")).unwrap_err();
        assert!(matches!(err, crate::domain::DocnavError::Io(_)));
    }
}
