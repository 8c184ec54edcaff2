//! Timestamped error log files.
//!
//! Each reported fault gets its own `error_<stamp>.log` in the configured
//! directory (the process working directory by default). One file per report
//! means log writes never contend with each other.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use super::sysinfo::system_summary;

/// Error log filename prefix. The settings UI and `reveal_error_log` rely on
/// this to recognize vidfetch error logs.
pub const ERROR_LOG_PREFIX: &str = "error_";

/// Error log filename extension.
pub const ERROR_LOG_EXT: &str = "log";

const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Write one error description to a fresh timestamped log file and return
/// its path.
///
/// Same-second reports get a `-1`, `-2`… suffix so no report ever overwrites
/// another.
pub fn write_error_log(dir: &Path, description: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format(STAMP_FORMAT).to_string();
    let path = next_free_path(dir, &stamp);

    let mut file = File::create(&path)?;
    writeln!(file, "{}", system_summary())?;
    writeln!(file)?;
    file.write_all(description.as_bytes())?;
    if !description.ends_with('\n') {
        writeln!(file)?;
    }

    Ok(path)
}

fn next_free_path(dir: &Path, stamp: &str) -> PathBuf {
    let base = dir.join(format!("{}{}.{}", ERROR_LOG_PREFIX, stamp, ERROR_LOG_EXT));
    if !base.exists() {
        return base;
    }

    let mut n = 1u32;
    loop {
        let candidate = dir.join(format!("{}{}-{}.{}", ERROR_LOG_PREFIX, stamp, n, ERROR_LOG_EXT));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Whether a path looks like a vidfetch error log. Used to keep
/// `reveal_error_log` from opening arbitrary files.
pub fn is_error_log_path(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with(ERROR_LOG_PREFIX) && path.extension().and_then(|e| e.to_str()) == Some(ERROR_LOG_EXT)
}
