//! The fixed fault-description lookup.
//!
//! Every reportable fault resolves to a human-readable description through
//! the tables in this module. The tables are data, not logic: a category maps
//! to exactly one template, and unknown HTTP statuses fall back to their
//! canonical reason phrase.

use reqwest::StatusCode;

use crate::error::{Fault, WebFailure, WebFailureKind};

/// Rendered when a fault carries no extra information.
pub const NO_EXTRA_INFO: &str = "No extra info provided.";

/// Title and detail lines for a transport-level failure category.
///
/// Returns `None` for `Protocol`, which resolves through the HTTP status
/// table instead.
pub fn web_failure_summary(kind: WebFailureKind) -> Option<(&'static str, &'static str)> {
    let summary = match kind {
        WebFailureKind::NameResolution => {
            ("Name resolution failure", "The name resolver service could not resolve the host name.")
        }
        WebFailureKind::ProxyNameResolution => {
            ("Proxy name resolution failure", "The name resolver service could not resolve the proxy host name.")
        }
        WebFailureKind::Connect => {
            ("Connection failure", "The remote service point could not be contacted at the transport level.")
        }
        WebFailureKind::ConnectionClosed => ("Connection closed", "The connection was prematurely closed."),
        WebFailureKind::Send => ("Send failure", "A complete request could not be sent to the remote server."),
        WebFailureKind::Receive => {
            ("Receive failure", "A complete response was not received from the remote server.")
        }
        WebFailureKind::Pipeline => (
            "Pipeline failure",
            "The request was pipelined and the connection was closed before the response was received.",
        ),
        WebFailureKind::KeepAlive => (
            "Keep-alive failure",
            "The connection for a request that specifies the Keep-alive header was closed unexpectedly.",
        ),
        WebFailureKind::Timeout => {
            ("Timeout", "No response was received during the time-out period for a request.")
        }
        WebFailureKind::Pending => ("Pending", "An internal asynchronous request is pending."),
        WebFailureKind::Cancelled => {
            ("Request cancelled", "The request was cancelled before it completed.")
        }
        WebFailureKind::Trust => ("Trust failure", "A server certificate could not be validated."),
        WebFailureKind::SecureChannel => {
            ("Secure channel failure", "An error occurred while establishing a connection using SSL.")
        }
        WebFailureKind::ProtocolViolation => {
            ("Server protocol violation", "The server response was not a valid HTTP response.")
        }
        WebFailureKind::MessageLengthExceeded => (
            "Message length limit exceeded",
            "A message exceeded the specified limit while sending a request or receiving a response.",
        ),
        WebFailureKind::CacheEntryNotFound => {
            ("Cache entry not found", "The specified cache entry was not found.")
        }
        WebFailureKind::CachePolicy => {
            ("Request prohibited by cache policy", "The request was not permitted by the cache policy.")
        }
        WebFailureKind::ProxyProhibited => {
            ("Request prohibited by proxy", "This request was not permitted by the proxy.")
        }
        WebFailureKind::Unknown => ("Unknown error", "An error of unknown type has occurred."),
        WebFailureKind::Protocol => return None,
    };
    Some(summary)
}

/// Title and detail lines for the HTTP statuses the application has fixed
/// copy for. Statuses outside the table are formatted from their canonical
/// reason phrase by the caller.
pub fn http_status_summary(status: u16) -> Option<(&'static str, &'static str)> {
    let summary = match status {
        301 => (
            "301 - Moved permanently",
            "The requested information has been moved to the URI specified in the Location header.",
        ),
        400 => ("400 - Bad request", "The request could not be understood by the server."),
        401 => ("401 - Unauthorized", "The requested resource requires authentication."),
        402 => (
            "402 - Payment required",
            "Payment is required to view this content. This status code is not natively used.",
        ),
        403 => ("403 - Forbidden", "You do not have permission to view this file."),
        404 => ("404 - Not found", "The file does not exist on the server."),
        405 => (
            "405 - Method not allowed",
            "The request method (GET) is not allowed on the requested resource.",
        ),
        406 => (
            "406 - Not acceptable",
            "The client has indicated with Accept headers that it will not accept any of the available representations of the resource.",
        ),
        407 => ("407 - Proxy authentication required", "The requested proxy requires authentication."),
        408 => (
            "408 - Request timeout",
            "The client did not send a request within the time the server was expecting it.",
        ),
        409 => (
            "409 - Conflict",
            "The request could not be carried out because of a conflict on the server.",
        ),
        410 => ("410 - Gone", "The requested resource is no longer available."),
        411 => ("411 - Length required", "The required Content-Length header is missing."),
        412 => (
            "412 - Precondition failed",
            "A condition set for this request failed, and the request cannot be carried out.",
        ),
        413 => ("413 - Request entity too large", "The request is too large for the server to process."),
        414 => ("414 - Request URI too long", "The URI is too long."),
        415 => ("415 - Unsupported media type", "The request is an unsupported type."),
        416 => (
            "416 - Requested range not satisfiable",
            "The range of data requested from the resource cannot be returned.",
        ),
        417 => (
            "417 - Expectation failed",
            "An expectation given in an Expect header could not be met by the server.",
        ),
        426 => ("426 - Upgrade required", "No information is available about this error code."),
        500 => ("500 - Internal server error", "An error occurred on the server."),
        501 => ("501 - Not implemented", "The server does not support the requested function."),
        502 => (
            "502 - Bad gateway",
            "The proxy server received a bad response from another proxy or the origin server.",
        ),
        503 => (
            "503 - Service unavailable",
            "The server is temporarily unavailable, likely due to high load or maintenance.",
        ),
        504 => (
            "504 - Gateway timeout",
            "An intermediate proxy timed out while waiting for a response from another proxy or the origin server.",
        ),
        505 => (
            "505 - HTTP version not supported",
            "The requested HTTP version is not supported by the server.",
        ),
        _ => return None,
    };
    Some(summary)
}

fn describe_web_failure(failure: &WebFailure) -> String {
    let mut out = format!("A web request to {} failed.\n\n", failure.url);

    match (failure.kind, failure.status) {
        (WebFailureKind::Protocol, Some(status)) => {
            if let Some((title, detail)) = http_status_summary(status) {
                out.push_str(title);
                out.push('\n');
                out.push_str(detail);
            } else {
                let reason = StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unrecognized status");
                out.push_str(&format!("{} - {}\n", status, reason));
                out.push_str("No further information is available about this status code.");
            }
        }
        (WebFailureKind::Protocol, None) => {
            out.push_str("Protocol error\n");
            out.push_str("The server returned an invalid or unexpected response.");
        }
        (kind, _) => {
            // Total by construction: every non-Protocol kind has a summary.
            let (title, detail) = web_failure_summary(kind)
                .unwrap_or(("Unknown error", "An error of unknown type has occurred."));
            out.push_str(title);
            out.push('\n');
            out.push_str(detail);
        }
    }

    if !failure.detail.is_empty() {
        out.push_str("\n\nUnderlying error:\n");
        out.push_str(&failure.detail);
    }

    out
}

/// Build the full user-facing description for a fault. This is the exact
/// text that gets logged and displayed.
pub fn describe_fault(fault: &Fault) -> String {
    match fault {
        Fault::Web(failure) => describe_web_failure(failure),
        Fault::DecimalParse(e) => {
            format!(
                "A numeric value could not be parsed.\n\n{}\nExtra info: {}",
                e.message,
                e.extra_info.as_deref().unwrap_or(NO_EXTRA_INFO)
            )
        }
        Fault::ApiParse(e) => {
            format!(
                "An API response could not be parsed.\n\n{}\nAPI URL: {}\nExtra info: {}",
                e.message,
                e.api_url,
                e.extra_info.as_deref().unwrap_or(NO_EXTRA_INFO)
            )
        }
        Fault::Other { summary, detail } => match detail {
            Some(detail) => format!("{}\n\nUnderlying error:\n{}", summary, detail),
            None => summary.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiParseError, DecimalParseError};

    #[test]
    fn test_every_non_protocol_kind_has_a_summary() {
        let kinds = [
            WebFailureKind::NameResolution,
            WebFailureKind::ProxyNameResolution,
            WebFailureKind::Connect,
            WebFailureKind::ConnectionClosed,
            WebFailureKind::Send,
            WebFailureKind::Receive,
            WebFailureKind::Pipeline,
            WebFailureKind::KeepAlive,
            WebFailureKind::Timeout,
            WebFailureKind::Pending,
            WebFailureKind::Cancelled,
            WebFailureKind::Trust,
            WebFailureKind::SecureChannel,
            WebFailureKind::ProtocolViolation,
            WebFailureKind::MessageLengthExceeded,
            WebFailureKind::CacheEntryNotFound,
            WebFailureKind::CachePolicy,
            WebFailureKind::ProxyProhibited,
            WebFailureKind::Unknown,
        ];
        for kind in kinds {
            let (title, detail) = web_failure_summary(kind).expect("summary missing");
            assert!(!title.is_empty());
            assert!(detail.ends_with('.'), "detail for {:?} should be a sentence", kind);
        }
        assert!(web_failure_summary(WebFailureKind::Protocol).is_none());
    }

    #[test]
    fn test_name_resolution_template() {
        let (title, detail) = web_failure_summary(WebFailureKind::NameResolution).unwrap();
        assert_eq!(title, "Name resolution failure");
        assert_eq!(detail, "The name resolver service could not resolve the host name.");
    }

    #[test]
    fn test_status_table_entries() {
        assert_eq!(
            http_status_summary(404),
            Some(("404 - Not found", "The file does not exist on the server."))
        );
        assert_eq!(
            http_status_summary(503),
            Some((
                "503 - Service unavailable",
                "The server is temporarily unavailable, likely due to high load or maintenance.",
            ))
        );
        let (title, _) = http_status_summary(411).unwrap();
        assert!(title.starts_with("411"), "411 entry must carry its own code");
    }

    #[test]
    fn test_status_table_covers_expected_range() {
        for status in (400..=417).chain([301, 426]).chain(500..=505) {
            let (title, detail) = http_status_summary(status)
                .unwrap_or_else(|| panic!("status {} missing from table", status));
            assert!(title.starts_with(&status.to_string()));
            assert!(!detail.is_empty());
        }
        assert_eq!(http_status_summary(418), None);
        assert_eq!(http_status_summary(200), None);
    }

    #[test]
    fn test_describe_protocol_failure_known_status() {
        let fault: Fault =
            WebFailure::protocol("https://example.com/clip", 403, "HTTP status client error (403 Forbidden)").into();
        let text = describe_fault(&fault);
        assert!(text.starts_with("A web request to https://example.com/clip failed.\n\n"));
        assert!(text.contains("403 - Forbidden\nYou do not have permission to view this file."));
        assert!(text.contains("Underlying error:\nHTTP status client error (403 Forbidden)"));
    }

    #[test]
    fn test_describe_protocol_failure_unknown_status_uses_canonical_reason() {
        let fault: Fault = WebFailure::protocol("https://example.com", 429, "too many requests").into();
        let text = describe_fault(&fault);
        assert!(text.contains("429 - Too Many Requests"));
        assert!(text.contains("No further information is available about this status code."));
    }

    #[test]
    fn test_describe_transport_failure() {
        let fault: Fault =
            WebFailure::new(WebFailureKind::Timeout, "https://example.com/v", "operation timed out").into();
        let text = describe_fault(&fault);
        assert!(text.contains("Timeout\nNo response was received during the time-out period for a request."));
    }

    #[test]
    fn test_describe_decimal_parse_without_extra_info() {
        let fault: Fault = DecimalParseError::new("playback rate is not a number").into();
        let text = describe_fault(&fault);
        assert!(text.starts_with("A numeric value could not be parsed.\n\n"));
        assert!(text.ends_with("Extra info: No extra info provided."));
    }

    #[test]
    fn test_describe_api_parse_with_extra_info() {
        let fault: Fault = ApiParseError::with_info(
            "missing 'token' field",
            "https://api.example.com/v2/auth",
            "response body was empty",
        )
        .into();
        let text = describe_fault(&fault);
        assert!(text.contains("API URL: https://api.example.com/v2/auth"));
        assert!(text.contains("Extra info: response body was empty"));
    }

    #[test]
    fn test_describe_other_fault() {
        let fault = Fault::other("writing the error log failed");
        assert_eq!(describe_fault(&fault), "writing the error log failed");

        let fault = Fault::other_with_detail("writing the error log failed", "permission denied (os error 13)");
        let text = describe_fault(&fault);
        assert!(text.contains("Underlying error:\npermission denied (os error 13)"));
    }
}
