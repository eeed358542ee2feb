// Application state module
// Built once at startup and shared read-only with every connection

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::logger;

/// Application state
pub struct AppState {
    pub config: Config,
    pub root: StaticRoot,
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            root: StaticRoot::new(&config.static_files.root, &config.static_files.index_file),
            shutdown: Arc::new(Notify::new()),
        }
    }
}

/// The directory subtree the server may read from
#[derive(Debug, Clone)]
pub struct StaticRoot {
    dir: PathBuf,
    canonical: Option<PathBuf>,
    index_file: String,
}

impl StaticRoot {
    pub fn new(dir: impl AsRef<Path>, index_file: &str) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let canonical = match dir.canonicalize() {
            Ok(p) => Some(p),
            Err(e) => {
                logger::log_warning(&format!(
                    "Static directory not found or inaccessible '{}': {e}",
                    dir.display()
                ));
                None
            }
        };
        Self {
            dir,
            canonical,
            index_file: index_file.to_string(),
        }
    }

    /// Root as configured; resolved paths are displayed relative to this
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index_file(&self) -> &str {
        &self.index_file
    }

    /// Canonical root used for containment checks.
    ///
    /// Falls back to a fresh lookup when the directory did not exist at startup.
    pub async fn canonical(&self) -> Option<PathBuf> {
        match &self.canonical {
            Some(p) => Some(p.clone()),
            None => tokio::fs::canonicalize(&self.dir).await.ok(),
        }
    }
}
