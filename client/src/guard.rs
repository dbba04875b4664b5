//! Route guard composed around protected views
//!
//! One decision function parameterized by the session context, so redirect
//! behavior is not duplicated per page.

use crate::session::{Route, SessionContext};

/// What a protected view should do given the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session active: render the protected view
    Render,
    /// Provider has not resolved yet: show the pending indicator
    AwaitSession,
    /// Resolved without a session: redirect to the login surface
    RedirectToLogin,
}

/// Decide how a protected view should respond to the session signal
pub fn resolve(session: &SessionContext) -> GuardDecision {
    if !session.is_resolved {
        GuardDecision::AwaitSession
    } else if !session.is_authenticated {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Render
    }
}

/// A view wrapped by the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protected<V> {
    View(V),
    Pending,
    Redirect(Route),
}

/// Compose the guard around a protected view. The view closure only runs
/// when the session allows rendering.
pub fn protect<V>(session: &SessionContext, view: impl FnOnce() -> V) -> Protected<V> {
    match resolve(session) {
        GuardDecision::Render => Protected::View(view()),
        GuardDecision::AwaitSession => Protected::Pending,
        GuardDecision::RedirectToLogin => Protected::Redirect(Route::Login),
    }
}
