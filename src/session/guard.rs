use std::sync::Arc;

use crate::config::RoutePaths;
use crate::providers::IdentityProvider;
use crate::session::{SessionManager, SessionStatus};

/// Outcome of a guard check for a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving: render a placeholder, issue no redirect.
    Pending,
    /// Authenticated (or the login surface itself): render the content.
    Allow,
    /// Send the visitor to the login surface, keeping the origin path so a
    /// successful login can return there.
    RedirectToLogin { from: String },
}

/// Single decision point wrapping protected views.
///
/// Decisions derive from the session manager's resolved status, never from a
/// separate check of its own, and a decision is pure: applying it is the
/// shell's job.
pub struct RouteGuard<I: IdentityProvider> {
    session: Arc<SessionManager<I>>,
    paths: RoutePaths,
}

impl<I: IdentityProvider> RouteGuard<I> {
    pub fn new(session: Arc<SessionManager<I>>, paths: RoutePaths) -> Self {
        Self { session, paths }
    }

    pub fn decide(&self, requested_path: &str) -> RouteDecision {
        // The login surface is never guarded; redirecting it would loop.
        if requested_path == self.paths.login {
            return RouteDecision::Allow;
        }
        match self.session.status() {
            SessionStatus::Initializing => RouteDecision::Pending,
            SessionStatus::Authenticated => RouteDecision::Allow,
            SessionStatus::Unauthenticated => RouteDecision::RedirectToLogin {
                from: requested_path.to_string(),
            },
        }
    }
}
