//! Modal error display.

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::logging;

const ERROR_DIALOG_TITLE: &str = "Vidfetch - an error occurred";

/// Show the error dialog and block until the user dismisses it.
///
/// Returns whether a dialog was actually shown. With no window to anchor to
/// (headless session, startup failure before the webview exists) the
/// description goes to the diagnostics log instead; the report still counts
/// as delivered.
pub fn show_error_dialog(app: &AppHandle, description: &str) -> bool {
    if app.webview_windows().is_empty() {
        logging::error(app, "dialog", &format!("no window for error dialog; description follows\n{}", description));
        return false;
    }

    app.dialog()
        .message(description)
        .title(ERROR_DIALOG_TITLE)
        .kind(MessageDialogKind::Error)
        .buttons(MessageDialogButtons::Ok)
        .blocking_show();

    true
}
