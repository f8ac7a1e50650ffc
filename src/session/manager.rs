use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::RoutePaths;
use crate::navigation::Navigator;
use crate::providers::IdentityProvider;
use crate::types::Identity;

/// Authentication status of the single per-process session.
///
/// Transitions: `Initializing -> {Authenticated, Unauthenticated}`,
/// `Authenticated -> Unauthenticated` (logout), `Unauthenticated ->
/// Authenticated` (login). Never returns to `Initializing` after the first
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Initializing,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug)]
struct SessionState {
    identity: Option<Identity>,
    status: SessionStatus,
    /// First `initialize` call has been issued.
    resolving: bool,
}

/// Owns authentication status and identity for the process lifetime.
///
/// Constructed once and shared by `Arc`; the identity collaborator and the
/// navigation capability are injected so the lifecycle logic stays free of
/// transport and routing effects.
pub struct SessionManager<I: IdentityProvider> {
    identity_provider: Arc<I>,
    navigator: Arc<dyn Navigator>,
    paths: RoutePaths,
    state: Mutex<SessionState>,
}

impl<I: IdentityProvider> SessionManager<I> {
    pub fn new(identity_provider: Arc<I>, navigator: Arc<dyn Navigator>, paths: RoutePaths) -> Self {
        Self {
            identity_provider,
            navigator,
            paths,
            state: Mutex::new(SessionState {
                identity: None,
                status: SessionStatus::Initializing,
                resolving: false,
            }),
        }
    }

    /// Resolve the session once at startup by asking the identity
    /// collaborator for the current identity.
    ///
    /// Any failure (network error, absence of a session) resolves to
    /// `Unauthenticated`; that is the expected anonymous-visitor path and is
    /// logged at DEBUG only. Calls after the first resolution, or while the
    /// first call is still in flight, are no-ops returning the current
    /// status. There are no retries and no periodic re-validation.
    pub async fn initialize(&self) -> SessionStatus {
        {
            let mut state = self.state.lock();
            if state.status != SessionStatus::Initializing || state.resolving {
                return state.status;
            }
            state.resolving = true;
        }

        let outcome = self.identity_provider.current_identity().await;

        let mut state = self.state.lock();
        // Apply only while still unresolved; an explicit login may have
        // landed in the meantime.
        if state.status == SessionStatus::Initializing {
            match outcome {
                Ok(identity) => {
                    tracing::info!(user = %identity.id, "session restored");
                    state.identity = Some(identity);
                    state.status = SessionStatus::Authenticated;
                }
                Err(err) => {
                    if err.is_session_absent() {
                        tracing::debug!("no existing session");
                    } else {
                        tracing::debug!(reason = %err, "session check failed");
                    }
                    state.identity = None;
                    state.status = SessionStatus::Unauthenticated;
                }
            }
        }
        state.status
    }

    /// Install a verified identity and transition to `Authenticated`.
    ///
    /// Credential verification itself happens in the identity collaborator;
    /// see `LoginCoordinator`.
    pub fn login(&self, identity: Identity) {
        tracing::info!(user = %identity.id, "logged in");
        let mut state = self.state.lock();
        state.identity = Some(identity);
        state.status = SessionStatus::Authenticated;
    }

    /// Terminate the session.
    ///
    /// Local state ends `Unauthenticated` regardless of the termination
    /// call's outcome. When the current location is inside the admin area
    /// (and not already the login surface), the navigator is sent to the
    /// login surface.
    pub async fn logout(&self) {
        if let Err(err) = self.identity_provider.terminate_session().await {
            tracing::warn!(reason = %err, "session termination call failed");
        }

        {
            let mut state = self.state.lock();
            state.identity = None;
            state.status = SessionStatus::Unauthenticated;
        }

        let current = self.navigator.current_path();
        if self.paths.in_admin_area(&current) && current != self.paths.login {
            self.navigator.replace(&self.paths.login);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().status == SessionStatus::Authenticated
    }

    pub fn status(&self) -> SessionStatus {
        self.state.lock().status
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.lock().identity.clone()
    }
}
