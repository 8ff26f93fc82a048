use axum::http::HeaderValue;

use crate::shared::constants::SESSION_COOKIE_CLEAR;

/// Capability handed to components that need to know about the user session.
///
/// The session itself is owned by an external authentication service; this
/// crate only reads whether one exists and can ask for it to be dropped.
pub trait SessionProvider {
    fn has_session(&self) -> bool;

    fn logout(&mut self);
}

/// Session token carried by the current request (bearer header or cookie)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSession {
    token: Option<String>,
}

impl RequestSession {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// `Set-Cookie` value expiring the session cookie
    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static(SESSION_COOKIE_CLEAR)
    }
}

impl SessionProvider for RequestSession {
    fn has_session(&self) -> bool {
        self.token.is_some()
    }

    fn logout(&mut self) {
        if self.token.take().is_some() {
            tracing::info!("Session cleared on logout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::SESSION_COOKIE_NAME;

    #[test]
    fn test_logout_drops_session() {
        let mut session = RequestSession::new(Some("tok".to_string()));
        assert!(session.has_session());
        session.logout();
        assert!(!session.has_session());
        session.logout();
        assert!(!session.has_session());
    }

    #[test]
    fn test_clear_cookie_targets_session_cookie() {
        let cookie = RequestSession::clear_cookie();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}=;", SESSION_COOKIE_NAME)));
        assert!(cookie.contains("Max-Age=0"));
    }
}
