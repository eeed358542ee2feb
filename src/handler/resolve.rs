//! Request path resolution
//!
//! Maps a URL path onto the static root without ever leaving it.

use std::path::{Path, PathBuf};

use crate::config::StaticRoot;
use crate::error::ServeError;
use crate::logger;

/// Join a URL path onto `root`, normalising segments lexically.
///
/// Empty and `.` segments are dropped and `..` removes the previous segment,
/// stopping at the root. The path is used verbatim otherwise (no percent-decoding).
pub fn join_within_root(root: &Path, request_path: &str) -> PathBuf {
    let mut segments: Vec<&str> = Vec::new();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut resolved = root.to_path_buf();
    resolved.extend(segments);
    resolved
}

/// Verify that `candidate` exists and its canonical form is a descendant of the root.
///
/// Catches escapes the lexical join cannot see, such as symlinks pointing outside.
pub async fn ensure_contained(
    root: &StaticRoot,
    request_path: &str,
    candidate: &Path,
) -> Result<(), ServeError> {
    let not_found = || ServeError::NotFound {
        path: candidate.to_path_buf(),
    };

    let canonical_root = root.canonical().await.ok_or_else(not_found)?;
    let canonical = tokio::fs::canonicalize(candidate)
        .await
        .map_err(|_| not_found())?;

    if !canonical.starts_with(&canonical_root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            canonical.display()
        ));
        return Err(not_found());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(path: &str) -> PathBuf {
        join_within_root(Path::new("dist"), path)
    }

    #[test]
    fn test_join_plain_paths() {
        assert_eq!(join("/"), PathBuf::from("dist"));
        assert_eq!(join(""), PathBuf::from("dist"));
        assert_eq!(join("/app.js"), PathBuf::from("dist/app.js"));
        assert_eq!(join("/assets/img/logo.png"), PathBuf::from("dist/assets/img/logo.png"));
    }

    #[test]
    fn test_join_collapses_dots_and_slashes() {
        assert_eq!(join("//assets/./img//logo.png"), PathBuf::from("dist/assets/img/logo.png"));
        assert_eq!(join("/assets/../app.js"), PathBuf::from("dist/app.js"));
    }

    #[test]
    fn test_join_clamps_traversal_at_root() {
        assert_eq!(join("/../../etc/passwd"), PathBuf::from("dist/etc/passwd"));
        assert_eq!(join("/a/../../../b"), PathBuf::from("dist/b"));
        assert_eq!(join("/.."), PathBuf::from("dist"));
    }

    #[test]
    fn test_join_never_replaces_root() {
        // A segment can't become absolute: the leading slash is consumed by the split
        assert_eq!(join("//etc/passwd"), PathBuf::from("dist/etc/passwd"));
        assert!(join("/x/../../../../..").starts_with("dist"));
    }

    #[test]
    fn test_join_keeps_percent_encoding() {
        assert_eq!(join("/%2e%2e/secret"), PathBuf::from("dist/%2e%2e/secret"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_outside_root_is_rejected() {
        let outside = tempfile::TempDir::new().unwrap();
        std::fs::write(outside.path().join("secret.txt"), "top secret").unwrap();

        let dir = tempfile::TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path().join("secret.txt"), dir.path().join("leak.txt"))
            .unwrap();
        std::fs::write(dir.path().join("ok.txt"), "fine").unwrap();

        let root = StaticRoot::new(dir.path(), "index.html");
        let leak = dir.path().join("leak.txt");
        assert!(matches!(
            ensure_contained(&root, "/leak.txt", &leak).await,
            Err(ServeError::NotFound { .. })
        ));
        assert!(ensure_contained(&root, "/ok.txt", &dir.path().join("ok.txt"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_missing_root_contains_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = StaticRoot::new(dir.path().join("not-built-yet"), "index.html");
        let candidate = dir.path().join("not-built-yet/index.html");
        assert!(ensure_contained(&root, "/", &candidate).await.is_err());
    }
}
