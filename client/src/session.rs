//! Session state supplied by the external identity provider
//!
//! The provider owns sign-in, sign-up, and account management; the client
//! only ever sees this read-only snapshot plus a sign-out capability that
//! returns control to the caller.

/// Navigable surfaces of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    Setup,
    BookAgent,
    Feedback,
}

/// Read-only snapshot of the identity provider's session signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// Whether a session is active
    pub is_authenticated: bool,
    /// Whether the provider has finished resolving the session at all
    pub is_resolved: bool,
}

impl SessionContext {
    /// Provider still resolving; nothing is known yet
    pub fn resolving() -> Self {
        Self {
            is_authenticated: false,
            is_resolved: false,
        }
    }

    /// Resolved with an active session
    pub fn signed_in() -> Self {
        Self {
            is_authenticated: true,
            is_resolved: true,
        }
    }

    /// Resolved without a session
    pub fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            is_resolved: true,
        }
    }

    /// End the session and hand the caller the landing route
    pub fn sign_out(self) -> (SessionContext, Route) {
        (SessionContext::signed_out(), Route::Home)
    }
}
