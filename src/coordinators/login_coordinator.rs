use std::sync::Arc;

use crate::errors::ApiError;
use crate::providers::IdentityProvider;
use crate::session::SessionManager;
use crate::types::{Credentials, Identity};

/// Orchestrates the login form flow: verify credentials with the identity
/// collaborator, then install the returned identity into the session.
pub struct LoginCoordinator<I: IdentityProvider> {
    identity_provider: Arc<I>,
    session: Arc<SessionManager<I>>,
}

impl<I: IdentityProvider> LoginCoordinator<I> {
    pub fn new(identity_provider: Arc<I>, session: Arc<SessionManager<I>>) -> Self {
        Self {
            identity_provider,
            session,
        }
    }

    /// Attempt a login. On success the session transitions to Authenticated
    /// and the identity is returned so the form can navigate back to where
    /// the guard captured the origin. On failure the session is untouched and
    /// the error belongs to the login form.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let identity = self.identity_provider.verify_credentials(credentials).await?;
        self.session.login(identity.clone());
        Ok(identity)
    }
}
