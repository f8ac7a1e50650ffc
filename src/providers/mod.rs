// Providers layer - trait seams for the external collaborators
//
// The session, loader, and coordinator cores are generic over these traits so
// they stay unit-testable without a backend. HTTP implementations live in
// `api`; test kits supply in-memory ones.

use crate::errors::ApiError;
use crate::types::{ContactMessage, Credentials, Draft, Identity, Profile, ProfileDraft};

/// Identity collaborator backing the session lifecycle.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the identity attached to the current transport session.
    ///
    /// Failing here is the expected anonymous-visitor path, not a fault.
    async fn current_identity(&self) -> Result<Identity, ApiError>;

    /// Verify login credentials and return the authenticated identity.
    async fn verify_credentials(&self, credentials: &Credentials) -> Result<Identity, ApiError>;

    /// Terminate the server-side session. Callers tolerate failure: local
    /// session state is cleared regardless.
    async fn terminate_session(&self) -> Result<(), ApiError>;
}

/// Collection collaborator for a CRUD-managed entity type.
#[allow(async_fn_in_trait)]
pub trait CollectionProvider: Send + Sync {
    type Entity: Clone;
    type Draft: Draft;

    async fn list(&self) -> Result<Vec<Self::Entity>, ApiError>;
    async fn create(&self, draft: &Self::Draft) -> Result<Self::Entity, ApiError>;
    async fn update(&self, id: &str, draft: &Self::Draft) -> Result<Self::Entity, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Read-only collaborator for incoming contact messages.
#[allow(async_fn_in_trait)]
pub trait MessageProvider: Send + Sync {
    async fn list(&self) -> Result<Vec<ContactMessage>, ApiError>;
}

/// Collaborator for the single site-owner profile.
#[allow(async_fn_in_trait)]
pub trait ProfileProvider: Send + Sync {
    async fn get(&self) -> Result<Profile, ApiError>;
    async fn update(&self, draft: &ProfileDraft) -> Result<Profile, ApiError>;
}
