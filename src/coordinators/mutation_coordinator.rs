use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::MutationError;
use crate::providers::CollectionProvider;
use crate::resource::ResourceLoader;
use crate::types::Draft;

/// Orchestrates create/update/delete against a collection collaborator and
/// reconciles the wrapped list loader afterward.
///
/// The cached list is never patched in place: every successful mutation ends
/// in a `refetch()`, so the visible list is always exactly the last
/// successful server read and a failed mutation cannot desync the view.
pub struct MutationCoordinator<P: CollectionProvider> {
    provider: Arc<P>,
    loader: Arc<ResourceLoader<Vec<P::Entity>>>,
    /// Entity ids with a mutation currently outstanding.
    in_flight: Mutex<HashSet<String>>,
    /// Entity ids whose delete awaits confirmation.
    pending_delete: Mutex<HashSet<String>>,
}

/// Releases the in-flight slot for an id on every exit path.
struct FlightSlot<'a> {
    slots: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for FlightSlot<'_> {
    fn drop(&mut self) {
        self.slots.lock().remove(&self.id);
    }
}

impl<P: CollectionProvider> MutationCoordinator<P> {
    pub fn new(provider: Arc<P>, loader: Arc<ResourceLoader<Vec<P::Entity>>>) -> Self {
        Self {
            provider,
            loader,
            in_flight: Mutex::new(HashSet::new()),
            pending_delete: Mutex::new(HashSet::new()),
        }
    }

    /// The loader this coordinator reconciles; views read state from it.
    pub fn loader(&self) -> &Arc<ResourceLoader<Vec<P::Entity>>> {
        &self.loader
    }

    /// Claim the single mutation slot for `id`.
    fn claim(&self, id: &str) -> Result<FlightSlot<'_>, MutationError> {
        let mut in_flight = self.in_flight.lock();
        if !in_flight.insert(id.to_string()) {
            return Err(MutationError::in_flight(id));
        }
        Ok(FlightSlot {
            slots: &self.in_flight,
            id: id.to_string(),
        })
    }

    /// Create an entity from a draft.
    ///
    /// The draft is normalized and validated before any network call; an
    /// invalid draft is rejected locally with field-level errors and nothing
    /// is issued. On success the wrapped loader is refetched and the created
    /// entity is returned as the completion signal (close the edit surface).
    /// On failure the caller's draft is untouched for retry.
    pub async fn create(&self, draft: &P::Draft) -> Result<P::Entity, MutationError> {
        let draft = draft.normalized();
        draft.validate()?;

        let created = self.provider.create(&draft).await?;
        tracing::debug!("entity created, reconciling list");
        self.loader.refetch().await;
        Ok(created)
    }

    /// Update the entity `id` from a draft; same validate/submit/refetch
    /// contract as `create`.
    ///
    /// While a mutation for `id` is outstanding, a second update or delete
    /// for the same id is rejected locally with `MutationError::InFlight`.
    pub async fn update(&self, id: &str, draft: &P::Draft) -> Result<P::Entity, MutationError> {
        let draft = draft.normalized();
        draft.validate()?;
        let _slot = self.claim(id)?;

        let updated = self.provider.update(id, &draft).await?;
        tracing::debug!(%id, "entity updated, reconciling list");
        self.loader.refetch().await;
        Ok(updated)
    }

    /// Mark `id` for deletion; the destructive call waits for
    /// `confirm_delete`.
    pub fn request_delete(&self, id: &str) {
        self.pending_delete.lock().insert(id.to_string());
    }

    /// Drop a pending delete without issuing any call.
    pub fn cancel_delete(&self, id: &str) {
        self.pending_delete.lock().remove(id);
    }

    /// Whether `id` has a delete awaiting confirmation.
    pub fn delete_pending(&self, id: &str) -> bool {
        self.pending_delete.lock().contains(id)
    }

    /// Issue the destructive call for a previously requested delete.
    ///
    /// Rejected when no delete is pending for `id`. On success the pending
    /// mark is cleared and the loader refetched; on failure the mark stays so
    /// the user may retry or cancel.
    pub async fn confirm_delete(&self, id: &str) -> Result<(), MutationError> {
        if !self.pending_delete.lock().contains(id) {
            return Err(MutationError::no_pending_delete(id));
        }
        let _slot = self.claim(id)?;

        self.provider.delete(id).await?;
        self.pending_delete.lock().remove(id);
        tracing::debug!(%id, "entity deleted, reconciling list");
        self.loader.refetch().await;
        Ok(())
    }
}
