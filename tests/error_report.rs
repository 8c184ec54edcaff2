//! End-to-end coverage of the describe -> logfile path: the exact text a
//! user would see in a dialog is what lands in the timestamped log file.

use std::fs;

use vidfetch_lib::error::{ApiParseError, DecimalParseError, Fault, WebFailure, WebFailureKind};
use vidfetch_lib::report::{describe, logfile};

#[test]
fn protocol_failure_description_lands_in_its_own_log_file() {
    let dir = tempfile::tempdir().unwrap();

    let fault: Fault =
        WebFailure::protocol("https://example.com/watch?v=abc", 404, "HTTP status client error (404 Not Found)")
            .into();
    let description = describe::describe_fault(&fault);
    let path = logfile::write_error_log(dir.path(), &description).unwrap();

    assert!(logfile::is_error_log_path(&path));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("System: "));
    assert!(contents.contains("A web request to https://example.com/watch?v=abc failed."));
    assert!(contents.contains("404 - Not found\nThe file does not exist on the server."));
    assert!(contents.contains("Underlying error:\nHTTP status client error (404 Not Found)"));
}

#[test]
fn transport_failure_uses_its_category_template() {
    let dir = tempfile::tempdir().unwrap();

    let fault: Fault = WebFailure::new(
        WebFailureKind::NameResolution,
        "https://no-such-host.example",
        "dns error: failed to lookup address",
    )
    .into();
    let path = logfile::write_error_log(dir.path(), &describe::describe_fault(&fault)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Name resolution failure"));
    assert!(contents.contains("The name resolver service could not resolve the host name."));
    assert!(contents.contains("dns error: failed to lookup address"));
}

#[test]
fn parse_faults_render_their_fallback_strings() {
    let decimal: Fault = DecimalParseError::new("max file size field is not a number").into();
    let text = describe::describe_fault(&decimal);
    assert!(text.contains("Extra info: No extra info provided."));

    let api: Fault = ApiParseError::new("missing 'items' array", "https://api.example.com/v1/playlist").into();
    let text = describe::describe_fault(&api);
    assert!(text.contains("API URL: https://api.example.com/v1/playlist"));
    assert!(text.contains("Extra info: No extra info provided."));
}

#[test]
fn each_report_gets_its_own_file() {
    let dir = tempfile::tempdir().unwrap();

    for status in [403, 404, 503] {
        let fault: Fault = WebFailure::protocol("https://example.com", status, "").into();
        logfile::write_error_log(dir.path(), &describe::describe_fault(&fault)).unwrap();
    }

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.iter().all(|p| logfile::is_error_log_path(p)));
}
