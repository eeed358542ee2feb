//! Static file serving module
//!
//! Resolves a request path under the root, substitutes the index file for
//! directories, reads the file and picks its content type.

use hyper::body::Bytes;
use std::path::PathBuf;
use tokio::fs;

use crate::config::StaticRoot;
use crate::error::ServeError;
use crate::handler::resolve;
use crate::http::mime;

/// A file that was found and read in full
#[derive(Debug)]
pub struct ServedFile {
    pub path: PathBuf,
    pub content: Bytes,
    pub content_type: &'static str,
}

/// Load the file a request path refers to
pub async fn load_file(root: &StaticRoot, request_path: &str) -> Result<ServedFile, ServeError> {
    let mut path = resolve::join_within_root(root.dir(), request_path);
    resolve::ensure_contained(root, request_path, &path).await?;

    let metadata = fs::metadata(&path)
        .await
        .map_err(|_| ServeError::NotFound { path: path.clone() })?;

    // Already contained; the index file is not re-checked
    if metadata.is_dir() {
        path.push(root.index_file());
    }

    let content = match fs::read(&path).await {
        Ok(c) => c,
        Err(source) => return Err(ServeError::ReadFailure { path, source }),
    };

    Ok(ServedFile {
        content_type: mime::content_type_for(&path),
        content: Bytes::from(content),
        path,
    })
}
