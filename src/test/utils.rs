// In-memory collaborator doubles shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::config::RoutePaths;
use crate::errors::ApiError;
use crate::navigation::InMemoryNavigator;
use crate::providers::{CollectionProvider, IdentityProvider};
use crate::session::SessionManager;
use crate::types::{Category, Credentials, Identity, Project, ProjectDraft};

pub fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        name: "Site Owner".to_string(),
        email: "owner@example.com".to_string(),
    }
}

pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: "short".to_string(),
        full_description: "long".to_string(),
        thumbnail: "https://example.com/t.jpg".to_string(),
        category: Category::Web,
        tech_stack: vec!["React".to_string()],
        live_url: None,
        github_url: None,
        featured: false,
    }
}

pub fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "A personal portfolio".to_string(),
        full_description: "Marketing page plus an admin area".to_string(),
        thumbnail: "https://example.com/thumb.jpg".to_string(),
        category: Category::Web,
        tech_stack: vec!["React".to_string()],
        live_url: None,
        github_url: None,
        featured: false,
    }
}

/// Identity collaborator double with scripted outcomes and call counters.
pub struct MockIdentityProvider {
    pub current: Result<Identity, ApiError>,
    pub verify: Result<Identity, ApiError>,
    pub terminate: Result<(), ApiError>,
    pub current_calls: AtomicUsize,
    pub verify_calls: AtomicUsize,
    pub terminate_calls: AtomicUsize,
}

impl MockIdentityProvider {
    pub fn with_session(identity: Identity) -> Self {
        Self {
            current: Ok(identity.clone()),
            verify: Ok(identity),
            terminate: Ok(()),
            current_calls: AtomicUsize::new(0),
            verify_calls: AtomicUsize::new(0),
            terminate_calls: AtomicUsize::new(0),
        }
    }

    pub fn without_session() -> Self {
        Self {
            current: Err(ApiError::SessionAbsent),
            verify: Err(ApiError::InvalidCredentials),
            terminate: Ok(()),
            current_calls: AtomicUsize::new(0),
            verify_calls: AtomicUsize::new(0),
            terminate_calls: AtomicUsize::new(0),
        }
    }
}

impl IdentityProvider for MockIdentityProvider {
    async fn current_identity(&self) -> Result<Identity, ApiError> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        self.current.clone()
    }

    async fn verify_credentials(&self, _credentials: &Credentials) -> Result<Identity, ApiError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.verify.clone()
    }

    async fn terminate_session(&self) -> Result<(), ApiError> {
        self.terminate_calls.fetch_add(1, Ordering::SeqCst);
        self.terminate.clone()
    }
}

/// Session manager over mocks, parked at `path`.
pub fn session_at(
    provider: MockIdentityProvider,
    path: &str,
) -> (
    Arc<SessionManager<MockIdentityProvider>>,
    Arc<InMemoryNavigator>,
    Arc<MockIdentityProvider>,
) {
    let provider = Arc::new(provider);
    let navigator = Arc::new(InMemoryNavigator::new(path));
    let manager = Arc::new(SessionManager::new(
        provider.clone(),
        navigator.clone(),
        RoutePaths::default(),
    ));
    (manager, navigator, provider)
}

/// Project collection double: records every call, can fail the next write,
/// and can park one `update` on a gate until the test releases it.
pub struct MockProjectProvider {
    pub items: Mutex<Vec<Project>>,
    pub calls: Mutex<Vec<String>>,
    pub last_draft: Mutex<Option<ProjectDraft>>,
    pub fail_next: Mutex<Option<ApiError>>,
    pub update_gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl MockProjectProvider {
    pub fn with_items(items: Vec<Project>) -> Self {
        Self {
            items: Mutex::new(items),
            calls: Mutex::new(Vec::new()),
            last_draft: Mutex::new(None),
            fail_next: Mutex::new(None),
            update_gate: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.fail_next.lock().take()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

impl CollectionProvider for MockProjectProvider {
    type Entity = Project;
    type Draft = ProjectDraft;

    async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.record("list");
        Ok(self.items.lock().clone())
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.record("create");
        *self.last_draft.lock() = Some(draft.clone());
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let created = Project {
            id: format!("p{}", self.items.lock().len() + 1),
            title: draft.title.clone(),
            description: draft.description.clone(),
            full_description: draft.full_description.clone(),
            thumbnail: draft.thumbnail.clone(),
            category: draft.category,
            tech_stack: draft.tech_stack.clone(),
            live_url: draft.live_url.clone(),
            github_url: draft.github_url.clone(),
            featured: draft.featured,
        };
        self.items.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.record(format!("update:{id}"));
        *self.last_draft.lock() = Some(draft.clone());
        let gate = self.update_gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut items = self.items.lock();
        let slot = items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::api(404, "project not found"))?;
        slot.title = draft.title.clone();
        slot.tech_stack = draft.tech_stack.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.items.lock().retain(|p| p.id != id);
        Ok(())
    }
}
