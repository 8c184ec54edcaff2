//! Error-report settings.
//!
//! The process-wide flag set the reporter consults at report time, plus its
//! JSON persistence under the Tauri config directory. Held behind a single
//! mutex; use `with_settings` for all access.

use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::logging;

/// Relative path (from the Tauri config directory) to the persisted settings.
const SETTINGS_RELATIVE_PATH: &str = "report-settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportSettings {
    /// Skip logging and display entirely.
    pub suppress_errors: bool,
    /// Persist descriptions to `error_*.log` files.
    pub log_errors: bool,
    /// Debug builds and sessions skip the log files but still show dialogs.
    pub debug_mode: bool,
    /// Where error logs go; `None` means the process working directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { suppress_errors: false, log_errors: true, debug_mode: false, log_dir: None }
    }
}

impl ReportSettings {
    /// The directory error logs are written to.
    pub fn resolved_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

static SETTINGS: Lazy<Mutex<ReportSettings>> = Lazy::new(|| Mutex::new(ReportSettings::default()));

/// Run a closure against the global settings. Short critical section; don't
/// do I/O inside the closure.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&mut ReportSettings) -> R,
{
    // A poisoned lock still holds usable flags; the reporter must not panic.
    let mut guard = SETTINGS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

/// Copy of the current settings.
pub fn snapshot() -> ReportSettings {
    with_settings(|s| s.clone())
}

/// Validate settings coming from the frontend.
pub fn validate_settings(settings: &ReportSettings) -> Result<(), String> {
    if let Some(dir) = &settings.log_dir {
        if dir.as_os_str().is_empty() {
            return Err("Log directory must not be empty".to_string());
        }
        if dir.exists() && !dir.is_dir() {
            return Err(format!("Log directory is not a directory: {}", dir.display()));
        }
    }
    Ok(())
}

fn resolve_settings_path(app: &AppHandle) -> Option<PathBuf> {
    app.path().resolve(SETTINGS_RELATIVE_PATH, BaseDirectory::Config).ok()
}

/// Load persisted settings into the global, if a settings file exists.
/// Missing or unreadable files leave the defaults in place.
pub fn load(app: &AppHandle) {
    let Some(path) = resolve_settings_path(app) else {
        logging::warn(app, "settings", "could not resolve settings path; using defaults");
        return;
    };

    if !path.exists() {
        return;
    }

    match std::fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str::<ReportSettings>(&raw) {
            Ok(loaded) => with_settings(|s| *s = loaded),
            Err(e) => {
                logging::warn(app, "settings", &format!("settings file is not valid JSON, using defaults: {}", e));
            }
        },
        Err(e) => {
            logging::warn(app, "settings", &format!("failed to read {}: {}", path.display(), e));
        }
    }
}

/// Persist the current settings. Best-effort: failures are diagnosed, not
/// propagated, so a broken config dir cannot take down a settings update.
pub fn save(app: &AppHandle) {
    let Some(path) = resolve_settings_path(app) else {
        logging::warn(app, "settings", "could not resolve settings path; settings not persisted");
        return;
    };

    let settings = snapshot();
    let json = match serde_json::to_string_pretty(&settings) {
        Ok(json) => json,
        Err(e) => {
            logging::error(app, "settings", &format!("failed to serialize settings: {}", e));
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            logging::error(app, "settings", &format!("failed to create {}: {}", parent.display(), e));
            return;
        }
    }

    if let Err(e) = std::fs::write(&path, json) {
        logging::error(app, "settings", &format!("failed to write {}: {}", path.display(), e));
    }
}
