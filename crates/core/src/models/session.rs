/// Authentication context handed explicitly to the API layer.
///
/// The token is opaque to this crate; it is attached as a bearer header and
/// dropped when the backend rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    expired: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            expired: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// True after the backend rejected the token; the shell should send the
    /// user to the login view with a "session expired" notice.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Drop the token after a 401/403.
    pub fn expire(&mut self) {
        self.token = None;
        self.expired = true;
    }

    /// Explicit logout; not flagged as an expiry.
    pub fn clear(&mut self) {
        self.token = None;
        self.expired = false;
    }
}
