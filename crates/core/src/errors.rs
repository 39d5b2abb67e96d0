use serde::Deserialize;
use thiserror::Error;

/// Unified error type for the entire netly-core library.
///
/// Only the I/O layer (API client, facade, settings) produces these.
/// The aggregation and chart services are total over their inputs and never fail.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport ───────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    // ── Authentication ──────────────────────────────────────────────
    #[error("Session expired: {0}")]
    SessionExpired(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    // ── Client errors ───────────────────────────────────────────────
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // ── Server ──────────────────────────────────────────────────────
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    // ── Payloads ────────────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid currency code '{0}': must be exactly 3 ASCII letters (e.g., INR, USD, EUR)")]
    InvalidCurrencyCode(String),
}

/// Error body the backend sends alongside a non-2xx status.
/// Either field may carry the human-readable reason.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl CoreError {
    /// Classify an HTTP status and optional response body into the error taxonomy.
    ///
    /// A message supplied by the server wins over the default text, except for
    /// 500 and 502/503/504 where the generic wording is always used.
    pub fn from_status(status: u16, body: Option<&str>) -> Self {
        let server_message = body
            .and_then(|b| serde_json::from_str::<ErrorBody>(b).ok())
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());

        let or_default = |default: &str| server_message.clone().unwrap_or_else(|| default.to_string());

        match status {
            0 => CoreError::Network(
                "Unable to connect to the server. Please check your network connection.".into(),
            ),
            400 => CoreError::BadRequest(or_default("Invalid request. Please check your input.")),
            401 => CoreError::SessionExpired(or_default(
                "Your session has expired. Please login again.",
            )),
            403 => CoreError::AccessDenied(or_default(
                "You do not have permission to perform this action.",
            )),
            404 => CoreError::NotFound(or_default("The requested resource was not found.")),
            409 => CoreError::Conflict(or_default(
                "A conflict occurred. Please refresh and try again.",
            )),
            422 => CoreError::Validation(or_default("Validation error. Please check your input.")),
            500 => CoreError::Server {
                status,
                message: "An error occurred on the server. Please try again later.".into(),
            },
            502..=504 => CoreError::Server {
                status,
                message: "Server is temporarily unavailable. Please try again later.".into(),
            },
            s if s >= 500 => CoreError::Server {
                status,
                message: or_default("An unexpected error occurred. Please try again."),
            },
            _ => CoreError::Api {
                status,
                message: or_default("An unexpected error occurred. Please try again."),
            },
        }
    }

    /// Short title a shell can show above the message.
    pub fn title(&self) -> &'static str {
        match self {
            CoreError::Network(_) => "Connection Error",
            CoreError::SessionExpired(_) => "Unauthorized",
            CoreError::AccessDenied(_) => "Access Denied",
            CoreError::BadRequest(_) => "Bad Request",
            CoreError::Validation(_) => "Validation Error",
            CoreError::NotFound(_) => "Not Found",
            CoreError::Conflict(_) => "Conflict",
            CoreError::Api { .. } => "Client Error",
            CoreError::Server { status, .. } if (502..=504).contains(status) => {
                "Service Unavailable"
            }
            CoreError::Server { .. } => "Server Error",
            CoreError::Deserialization(_) | CoreError::Serialization(_) => "Error",
            CoreError::InvalidCurrencyCode(_) => "Invalid Setting",
        }
    }

    /// Whether this error means the session token is no longer usable.
    /// Both 401 and 403 end the session.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, CoreError::SessionExpired(_) | CoreError::AccessDenied(_))
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs so tokens passed as params never leak into messages.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        if e.is_decode() {
            CoreError::Deserialization(sanitized)
        } else {
            CoreError::Network(sanitized)
        }
    }
}
