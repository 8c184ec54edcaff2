//! Typed fault values consumed by the report pipeline.
//!
//! Every fault is an immutable bundle built once at the failure site and
//! handed to `report::report` exactly once. The reporter owns all policy
//! (suppression, logging, display); these types only carry the facts.

use serde::Serialize;
use thiserror::Error;

/// Transport-level categories for a failed web request.
///
/// This is a closed taxonomy: every category has a fixed human-readable
/// template in `report::describe`. `Protocol` failures carry an HTTP status
/// on the surrounding [`WebFailure`] and resolve through the status table
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WebFailureKind {
    /// The resolver could not resolve the host name.
    NameResolution,
    /// The resolver could not resolve the proxy host name.
    ProxyNameResolution,
    /// The remote endpoint could not be contacted at the transport level.
    Connect,
    /// The connection was closed prematurely.
    ConnectionClosed,
    /// A complete request could not be sent to the remote server.
    Send,
    /// A complete response was not received from the remote server.
    Receive,
    /// A pipelined request lost its connection before the response arrived.
    Pipeline,
    /// A keep-alive connection was closed unexpectedly.
    KeepAlive,
    /// No response arrived within the request timeout.
    Timeout,
    /// An internal asynchronous request is still pending.
    Pending,
    /// The request was cancelled by the user. Never reported.
    Cancelled,
    /// A server certificate could not be validated.
    Trust,
    /// TLS negotiation failed while establishing the connection.
    SecureChannel,
    /// The response was not a valid HTTP response.
    ProtocolViolation,
    /// A message exceeded the configured length limit.
    MessageLengthExceeded,
    /// The requested cache entry was not found.
    CacheEntryNotFound,
    /// The cache policy prohibited the request.
    CachePolicy,
    /// The proxy prohibited the request.
    ProxyProhibited,
    /// The server answered with a non-success HTTP status.
    Protocol,
    /// Anything the classifier could not place.
    Unknown,
}

/// A failed web request, ready for reporting.
#[derive(Debug, Clone, Error)]
#[error("web request to {url} failed: {detail}")]
pub struct WebFailure {
    pub kind: WebFailureKind,
    /// The address that (might have) caused the problem.
    pub url: String,
    /// HTTP status, present only for `Protocol` failures.
    pub status: Option<u16>,
    /// Display text of the underlying error.
    pub detail: String,
}

impl WebFailure {
    pub fn new(kind: WebFailureKind, url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { kind, url: url.into(), status: None, detail: detail.into() }
    }

    /// A protocol-level failure carrying the HTTP status the server returned.
    pub fn protocol(url: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self { kind: WebFailureKind::Protocol, url: url.into(), status: Some(status), detail: detail.into() }
    }

    /// Classify a `reqwest` error into the fixed taxonomy.
    ///
    /// The mapping is intentionally coarse: reqwest does not distinguish
    /// every category the taxonomy knows (trust failures surface as connect
    /// errors, for example), so the classifier only claims what it can see.
    pub fn classify(url: impl Into<String>, err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            WebFailureKind::Timeout
        } else if err.is_connect() {
            WebFailureKind::Connect
        } else if err.status().is_some() {
            WebFailureKind::Protocol
        } else if err.is_body() || err.is_decode() {
            WebFailureKind::Receive
        } else if err.is_request() {
            WebFailureKind::Send
        } else {
            WebFailureKind::Unknown
        };

        Self {
            kind,
            url: url.into(),
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }
}

/// A numeric field that failed to parse, with whatever context the failure
/// site had on hand.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DecimalParseError {
    pub message: String,
    pub extra_info: Option<String>,
}

impl DecimalParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), extra_info: None }
    }

    pub fn with_info(message: impl Into<String>, extra_info: impl Into<String>) -> Self {
        Self { message: message.into(), extra_info: Some(extra_info.into()) }
    }
}

/// A provider API response that failed to parse at a critical point.
#[derive(Debug, Clone, Error)]
#[error("failed to parse API response from {api_url}: {message}")]
pub struct ApiParseError {
    pub message: String,
    pub api_url: String,
    pub extra_info: Option<String>,
}

impl ApiParseError {
    pub fn new(message: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self { message: message.into(), api_url: api_url.into(), extra_info: None }
    }

    pub fn with_info(
        message: impl Into<String>,
        api_url: impl Into<String>,
        extra_info: impl Into<String>,
    ) -> Self {
        Self { message: message.into(), api_url: api_url.into(), extra_info: Some(extra_info.into()) }
    }
}

/// Union of everything the reporter accepts.
#[derive(Debug, Clone, Error)]
pub enum Fault {
    #[error(transparent)]
    Web(WebFailure),

    #[error(transparent)]
    DecimalParse(DecimalParseError),

    #[error(transparent)]
    ApiParse(ApiParseError),

    /// Any other caught error: a one-line summary plus optional detail.
    #[error("{summary}")]
    Other { summary: String, detail: Option<String> },
}

impl Fault {
    pub fn other(summary: impl Into<String>) -> Self {
        Self::Other { summary: summary.into(), detail: None }
    }

    pub fn other_with_detail(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Other { summary: summary.into(), detail: Some(detail.into()) }
    }
}

impl From<WebFailure> for Fault {
    fn from(f: WebFailure) -> Self {
        Fault::Web(f)
    }
}

impl From<DecimalParseError> for Fault {
    fn from(e: DecimalParseError) -> Self {
        Fault::DecimalParse(e)
    }
}

impl From<ApiParseError> for Fault {
    fn from(e: ApiParseError) -> Self {
        Fault::ApiParse(e)
    }
}

// For Tauri command compatibility - auto-converts to String
impl From<Fault> for String {
    fn from(fault: Fault) -> String {
        fault.to_string()
    }
}

impl From<&Fault> for String {
    fn from(fault: &Fault) -> String {
        fault.to_string()
    }
}

/// What the reporter did with a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportOutcome {
    /// The dialog was shown and dismissed.
    Acknowledged,
    /// The suppress-errors flag was set; nothing was logged or shown.
    Suppressed,
    /// User-initiated cancellation; not an error, never surfaced.
    Ignored,
}
