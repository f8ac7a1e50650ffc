use thiserror::Error;

use super::api::ApiError;
use super::validation::ValidationError;

/// Errors surfaced by the mutation coordinator.
///
/// `Validation` and `InFlight` are rejected locally before any network call;
/// the caller's draft is untouched on every variant so a retry can reuse it.
#[derive(Error, Debug)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A mutation for this entity id is still outstanding.
    #[error("a change for entity {id} is already in flight")]
    InFlight { id: String },

    /// `confirm_delete` was called without a prior `request_delete`.
    #[error("no delete pending for entity {id}")]
    NoPendingDelete { id: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl MutationError {
    pub fn in_flight(id: impl Into<String>) -> Self {
        MutationError::InFlight { id: id.into() }
    }

    pub fn no_pending_delete(id: impl Into<String>) -> Self {
        MutationError::NoPendingDelete { id: id.into() }
    }
}
