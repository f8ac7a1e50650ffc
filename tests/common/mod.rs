// Shared collaborator doubles for the integration suite.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use portfolio_client::config::RoutePaths;
use portfolio_client::errors::ApiError;
use portfolio_client::navigation::InMemoryNavigator;
use portfolio_client::providers::{CollectionProvider, IdentityProvider};
use portfolio_client::session::SessionManager;
use portfolio_client::types::{Category, Credentials, Identity, Project, ProjectDraft};

pub fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        name: "Site Owner".to_string(),
        email: "owner@example.com".to_string(),
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        email: "owner@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
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

/// Identity collaborator double with scripted outcomes.
pub struct StubIdentityProvider {
    pub current: Result<Identity, ApiError>,
    pub verify: Result<Identity, ApiError>,
    pub terminate: Result<(), ApiError>,
    pub verify_calls: AtomicUsize,
}

impl StubIdentityProvider {
    pub fn with_session(identity: Identity) -> Self {
        Self {
            current: Ok(identity.clone()),
            verify: Ok(identity),
            terminate: Ok(()),
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn without_session() -> Self {
        Self {
            current: Err(ApiError::SessionAbsent),
            verify: Err(ApiError::InvalidCredentials),
            terminate: Ok(()),
            verify_calls: AtomicUsize::new(0),
        }
    }
}

impl IdentityProvider for StubIdentityProvider {
    async fn current_identity(&self) -> Result<Identity, ApiError> {
        self.current.clone()
    }

    async fn verify_credentials(&self, _credentials: &Credentials) -> Result<Identity, ApiError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.verify.clone()
    }

    async fn terminate_session(&self) -> Result<(), ApiError> {
        self.terminate.clone()
    }
}

/// Session manager over stubs, parked at `path`.
pub fn session_at(
    provider: StubIdentityProvider,
    path: &str,
) -> (
    Arc<SessionManager<StubIdentityProvider>>,
    Arc<InMemoryNavigator>,
    Arc<StubIdentityProvider>,
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

/// In-memory project collection recording every call.
pub struct StubProjectProvider {
    pub items: Mutex<Vec<Project>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_next: Mutex<Option<ApiError>>,
}

impl StubProjectProvider {
    pub fn with_items(items: Vec<Project>) -> Self {
        Self {
            items: Mutex::new(items),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.fail_next.lock().take()
    }
}

impl CollectionProvider for StubProjectProvider {
    type Entity = Project;
    type Draft = ProjectDraft;

    async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.record("list");
        Ok(self.items.lock().clone())
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.record("create");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut created = project(&format!("p{}", self.items.lock().len() + 1), &draft.title);
        created.tech_stack = draft.tech_stack.clone();
        self.items.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.record(format!("update:{id}"));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut items = self.items.lock();
        let slot = items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::api(404, "project not found"))?;
        slot.title = draft.title.clone();
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
