//! Tauri command handlers for the report system.
//!
//! Exposes fault reporting and report settings to the frontend.

use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use tauri::{AppHandle, Emitter};
use tauri_plugin_opener::OpenerExt;

use crate::error::{Fault, ReportOutcome, WebFailure, WebFailureKind};
use crate::events::*;
use crate::logging;
use crate::settings::{self, ReportSettings};

use super::{logfile, report};

/// Maximum URL length to prevent abuse
pub const MAX_URL_LENGTH: usize = 4096;

/// Preflight request timeout.
const CHECK_URL_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("vidfetch/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build reqwest client")
});

/// Validate a URL at the command boundary.
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(format!("URL exceeds maximum length of {} characters", MAX_URL_LENGTH));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    Ok(())
}

/// Run the blocking report pipeline off the async runtime's worker threads.
async fn report_off_thread(app: AppHandle, fault: Fault) -> ReportOutcome {
    match tauri::async_runtime::spawn_blocking(move || report(&app, &fault)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Report task failed to join: {}", e);
            ReportOutcome::Acknowledged
        }
    }
}

/// Preflight a media URL before it enters the download list.
///
/// Returns the HTTP status on success. Any failure is classified, routed
/// through the reporter (dialog, log file), and surfaced to the caller as
/// the one-line summary.
#[tauri::command]
pub async fn check_url(app: AppHandle, url: String) -> Result<u16, String> {
    validate_url(&url)?;

    let response = match tokio::time::timeout(CHECK_URL_TIMEOUT, CLIENT.get(&url).send()).await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            let failure = WebFailure::classify(&url, &e);
            let summary = failure.to_string();
            report_off_thread(app, failure.into()).await;
            return Err(summary);
        }
        Err(_elapsed) => {
            let failure = WebFailure::new(
                WebFailureKind::Timeout,
                &url,
                format!("no response within {} seconds", CHECK_URL_TIMEOUT.as_secs()),
            );
            let summary = failure.to_string();
            report_off_thread(app, failure.into()).await;
            return Err(summary);
        }
    };

    let status = response.status();
    if !status.is_success() {
        let failure = WebFailure::protocol(&url, status.as_u16(), format!("the server answered {}", status));
        let summary = failure.to_string();
        report_off_thread(app, failure.into()).await;
        return Err(summary);
    }

    Ok(status.as_u16())
}

/// Route an error caught in the webview through the same reporter the
/// backend uses.
#[tauri::command]
pub async fn report_frontend_error(app: AppHandle, summary: String, detail: Option<String>) -> ReportOutcome {
    let fault = match detail {
        Some(detail) => Fault::other_with_detail(summary, detail),
        None => Fault::other(summary),
    };
    report_off_thread(app, fault).await
}

#[tauri::command]
pub fn get_report_settings() -> ReportSettings {
    settings::snapshot()
}

#[tauri::command]
pub fn set_report_settings(app: AppHandle, new_settings: ReportSettings) -> Result<(), String> {
    settings::validate_settings(&new_settings)?;

    settings::with_settings(|s| *s = new_settings.clone());
    settings::save(&app);

    if let Err(e) = app.emit(EVT_REPORT_SETTINGS_UPDATED, new_settings) {
        logging::warn(&app, "settings", &format!("failed to emit {}: {}", EVT_REPORT_SETTINGS_UPDATED, e));
    }

    Ok(())
}

/// Reveal an error log in the platform file manager.
#[tauri::command]
pub fn reveal_error_log(app: AppHandle, path: String) -> Result<(), String> {
    let path = PathBuf::from(path);

    if !logfile::is_error_log_path(&path) {
        return Err("Not a vidfetch error log".to_string());
    }

    if !path.exists() {
        return Err(format!("Log file does not exist: {}", path.display()));
    }

    app.opener().reveal_item_in_dir(&path).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://example.com/watch?v=abc").is_ok());
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_empty() {
        assert!(validate_url("").is_err());
        assert!(validate_url("   ").is_err());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(validate_url("ftp://example.com/file").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("example.com").is_err());
    }

    #[test]
    fn test_validate_url_rejects_oversized() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(validate_url(&url).is_err());
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_classify_against_closed_port() {
        let client = Client::builder().timeout(Duration::from_secs(5)).build().unwrap();
        let err = client.get("http://127.0.0.1:9").send().await.unwrap_err();
        let failure = WebFailure::classify("http://127.0.0.1:9", &err);
        assert!(
            matches!(failure.kind, WebFailureKind::Connect | WebFailureKind::Timeout),
            "closed port should classify as connect or timeout, got {:?}",
            failure.kind
        );
    }
}
