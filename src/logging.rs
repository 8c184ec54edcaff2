//! Internal diagnostics for the reporter itself.
//!
//! Distinct from the user-facing `error_*.log` files: this is where the
//! reporter records its own trouble (emit failures, settings persistence
//! failures, unavailable dialogs). Lines go to stderr and, best-effort, to a
//! size-rotated diagnostics file under the Tauri config directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::Local;
use tauri::{path::BaseDirectory, AppHandle, Manager};

/// Relative path (from the Tauri config directory) to the diagnostics file.
const DIAG_LOG_RELATIVE_PATH: &str = "logs/vidfetch-diagnostics.log";

/// Environment variable to control diagnostics verbosity.
const LOG_LEVEL_ENV_VAR: &str = "VIDFETCH_LOG_LEVEL";

/// Maximum size of the diagnostics file before rotation (in bytes).
const MAX_LOG_BYTES: u64 = 1_000_000; // ~1 MB

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

fn min_level() -> LogLevel {
    static LEVEL: OnceLock<LogLevel> = OnceLock::new();

    *LEVEL.get_or_init(|| {
        std::env::var(LOG_LEVEL_ENV_VAR).ok().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
    })
}

fn resolve_diag_path(app: &AppHandle) -> Option<PathBuf> {
    app.path().resolve(DIAG_LOG_RELATIVE_PATH, BaseDirectory::Config).ok()
}

fn rotate_if_needed(path: &Path) -> io::Result<()> {
    if let Ok(meta) = fs::metadata(path) {
        if meta.len() >= MAX_LOG_BYTES {
            // Single-file rotation: vidfetch-diagnostics.log -> .log.1
            let file_name =
                path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| "diagnostics.log".into());
            let rotated_path = path.with_file_name(format!("{}.1", file_name));

            let _ = fs::remove_file(&rotated_path);
            fs::rename(path, rotated_path)?;
        }
    }

    Ok(())
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    rotate_if_needed(path)?;

    let mut file = if path.exists() {
        OpenOptions::new().append(true).open(path)?
    } else {
        File::create(path)?
    };

    writeln!(file, "{}", line)?;
    Ok(())
}

fn log(app: &AppHandle, level: LogLevel, context: &str, message: &str) {
    if level > min_level() {
        return;
    }

    let line = format!("{} {} {}: {}", Local::now().format("%Y-%m-%dT%H:%M:%S%:z"), level, context, message);
    eprintln!("{}", line);

    let Some(path) = resolve_diag_path(app) else {
        // No config dir to write under; stderr already has the line.
        return;
    };

    if let Err(e) = append_line(&path, &line) {
        eprintln!("Failed to write diagnostics entry to {}: {}", path.display(), e);
    }
}

pub fn error(app: &AppHandle, context: &str, message: &str) {
    log(app, LogLevel::Error, context, message);
}

pub fn warn(app: &AppHandle, context: &str, message: &str) {
    log(app, LogLevel::Warn, context, message);
}

pub fn info(app: &AppHandle, context: &str, message: &str) {
    log(app, LogLevel::Info, context, message);
}

pub fn debug(app: &AppHandle, context: &str, message: &str) {
    log(app, LogLevel::Debug, context, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_level_parse_and_display() {
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Info.to_string(), "INFO");
    }

    #[test]
    fn test_append_line_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("diag.log");
        append_line(&path, "first line").unwrap();
        append_line(&path, "second line").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn test_rotation_moves_oversized_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag.log");
        fs::write(&path, vec![b'x'; (MAX_LOG_BYTES + 1) as usize]).unwrap();

        append_line(&path, "fresh").unwrap();

        let rotated = dir.path().join("diag.log.1");
        assert!(rotated.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
