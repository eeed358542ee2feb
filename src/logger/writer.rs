//! Log writer module
//!
//! Routes log lines to stdout/stderr or append-mode files and filters them by level.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::config::{LogLevel, LoggingConfig};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Level assumed before `init()` runs (tests, early startup)
const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl LogTarget {
    fn open(path: Option<&str>, fallback: Self) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(Mutex::new(open_log_file(p)?))),
            None => Ok(fallback),
        }
    }

    fn write_line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{message}");
                }
            }
        }
    }
}

/// Thread-safe log writer
pub struct LogWriter {
    level: LogLevel,
    /// Access lines and informational messages
    access: LogTarget,
    /// Warnings and errors
    error: LogTarget,
}

impl LogWriter {
    fn new(config: &LoggingConfig) -> io::Result<Self> {
        Ok(Self {
            level: config.level,
            access: LogTarget::open(config.access_log_file.as_deref(), LogTarget::Stdout)?,
            error: LogTarget::open(config.error_log_file.as_deref(), LogTarget::Stderr)?,
        })
    }

    pub fn write_access(&self, message: &str) {
        self.access.write_line(message);
    }

    pub fn write_error(&self, message: &str) {
        self.error.write_line(message);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global log writer
///
/// Returns error if log files cannot be opened or the writer was already set.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let writer = LogWriter::new(config)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

/// Whether a message at `level` passes the configured filter
pub fn enabled(level: LogLevel) -> bool {
    let max = get().map_or(DEFAULT_LEVEL, |w| w.level);
    level <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn logging_config(file: &Path) -> LoggingConfig {
        LoggingConfig {
            level: LogLevel::Warn,
            access_log: true,
            access_log_format: "common".to_string(),
            access_log_file: Some(file.to_string_lossy().into_owned()),
            error_log_file: None,
        }
    }

    #[test]
    fn test_file_target_appends_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/access.log");
        let writer = LogWriter::new(&logging_config(&path)).unwrap();

        writer.write_access("first");
        writer.write_access("second");

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
