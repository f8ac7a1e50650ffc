use std::sync::Arc;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::providers::IdentityProvider;
use crate::types::{Credentials, Identity};

/// Identity collaborator over the backend auth endpoints.
///
/// The session cookie set by a successful login lives in the shared
/// `ApiClient` cookie jar; this type never sees a token.
pub struct HttpIdentityProvider {
    client: Arc<ApiClient>,
}

impl HttpIdentityProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl IdentityProvider for HttpIdentityProvider {
    async fn current_identity(&self) -> Result<Identity, ApiError> {
        match self.client.get::<Identity>("/auth/me").await {
            Err(ApiError::Api { status: 401, .. }) => Err(ApiError::SessionAbsent),
            other => other,
        }
    }

    async fn verify_credentials(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        match self.client.post::<_, Identity>("/auth/login", credentials).await {
            Err(ApiError::Api { status: 401, .. }) => Err(ApiError::InvalidCredentials),
            other => other,
        }
    }

    async fn terminate_session(&self) -> Result<(), ApiError> {
        self.client.post_unit("/auth/logout").await
    }
}
