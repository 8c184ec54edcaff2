//! Fault reporting pipeline.
//!
//! Maps a caught fault to its fixed description, persists it to a
//! timestamped log file, and shows a modal dialog, all gated by the report
//! settings. The pipeline never returns an error to its caller: whatever
//! goes wrong in here is degraded into diagnostics, not propagated.
//!
//! ## Module Structure
//! - `commands` - Tauri command handlers
//! - `describe` - fixed fault-description lookup
//! - `dialog` - modal error display
//! - `logfile` - timestamped error log files
//! - `sysinfo` - one-time system summary

pub mod commands;
pub mod describe;
pub mod logfile;
pub mod sysinfo;

mod dialog;

use tauri::{AppHandle, Emitter};

use crate::error::{Fault, ReportOutcome, WebFailureKind};
use crate::events::*;
use crate::logging;
use crate::settings;

/// Report a fault: describe, log, display.
///
/// Blocks on the modal dialog; call from a command handler or a blocking
/// task, never from the main thread.
pub fn report(app: &AppHandle, fault: &Fault) -> ReportOutcome {
    report_inner(app, fault, true)
}

fn report_inner(app: &AppHandle, fault: &Fault, allow_log: bool) -> ReportOutcome {
    let cfg = settings::snapshot();

    if cfg.suppress_errors {
        return ReportOutcome::Suppressed;
    }

    // User-initiated cancellation is not an error.
    if matches!(fault, Fault::Web(f) if f.kind == WebFailureKind::Cancelled) {
        return ReportOutcome::Ignored;
    }

    let description = describe::describe_fault(fault);

    if allow_log && cfg.log_errors && !cfg.debug_mode {
        match logfile::write_error_log(&cfg.resolved_log_dir(), &description) {
            Ok(path) => {
                if let Err(e) = app.emit(EVT_ERROR_LOG_WRITTEN, path.display().to_string()) {
                    logging::warn(app, "report", &format!("failed to emit {}: {}", EVT_ERROR_LOG_WRITTEN, e));
                }
            }
            Err(e) => {
                // The log write itself failed; report that too, with the
                // write step disabled so the recursion stops at one level.
                let log_fault = Fault::other_with_detail("writing the error log failed", e.to_string());
                report_inner(app, &log_fault, false);
            }
        }
    }

    if let Err(e) = app.emit(EVT_ERROR_REPORTED, fault.to_string()) {
        logging::warn(app, "report", &format!("failed to emit {}: {}", EVT_ERROR_REPORTED, e));
    }

    dialog::show_error_dialog(app, &description);

    ReportOutcome::Acknowledged
}
