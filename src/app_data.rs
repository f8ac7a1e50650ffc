use std::sync::Arc;

use crate::api::{
    ApiClient, HttpIdentityProvider, HttpMessageProvider, HttpProfileProvider, HttpProjectProvider,
};
use crate::config::{ApiSettings, RoutePaths};
use crate::coordinators::{LoginCoordinator, MutationCoordinator};
use crate::errors::ApiError;
use crate::navigation::Navigator;
use crate::providers::{CollectionProvider, MessageProvider, ProfileProvider};
use crate::resource::ResourceLoader;
use crate::session::{RouteGuard, SessionManager};
use crate::types::{ContactMessage, Profile, Project};

/// Centralized client wiring following the shell-owned instances pattern.
///
/// Every collaborator is constructed once here and shared by `Arc`; nothing
/// in the crate reaches for ambient globals. The UI shell builds one AppData,
/// derives the session manager, guard, loaders, and coordinators from it, and
/// passes them down.
pub struct AppData {
    pub settings: ApiSettings,
    pub paths: RoutePaths,
    pub api: Arc<ApiClient>,
    pub identity_provider: Arc<HttpIdentityProvider>,
    pub project_provider: Arc<HttpProjectProvider>,
    pub message_provider: Arc<HttpMessageProvider>,
    pub profile_provider: Arc<HttpProfileProvider>,
    pub navigator: Arc<dyn Navigator>,
}

impl AppData {
    /// Build the full collaborator set from environment settings.
    pub fn init(navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        Self::with_settings(ApiSettings::from_env(), navigator)
    }

    pub fn with_settings(
        settings: ApiSettings,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        tracing::info!(base_url = %settings.base_url, "initializing client collaborators");
        let api = Arc::new(ApiClient::new(&settings)?);

        Ok(Self {
            paths: RoutePaths::default(),
            identity_provider: Arc::new(HttpIdentityProvider::new(api.clone())),
            project_provider: Arc::new(HttpProjectProvider::new(api.clone())),
            message_provider: Arc::new(HttpMessageProvider::new(api.clone())),
            profile_provider: Arc::new(HttpProfileProvider::new(api.clone())),
            api,
            settings,
            navigator,
        })
    }

    /// Session manager wired to this app's identity collaborator. Call
    /// `initialize()` on it once at startup.
    pub fn session_manager(&self) -> Arc<SessionManager<HttpIdentityProvider>> {
        Arc::new(SessionManager::new(
            self.identity_provider.clone(),
            self.navigator.clone(),
            self.paths.clone(),
        ))
    }

    pub fn route_guard(
        &self,
        session: Arc<SessionManager<HttpIdentityProvider>>,
    ) -> RouteGuard<HttpIdentityProvider> {
        RouteGuard::new(session, self.paths.clone())
    }

    pub fn login_coordinator(
        &self,
        session: Arc<SessionManager<HttpIdentityProvider>>,
    ) -> LoginCoordinator<HttpIdentityProvider> {
        LoginCoordinator::new(self.identity_provider.clone(), session)
    }

    /// Loader for the project list; one per owning view.
    pub fn project_loader(&self) -> Arc<ResourceLoader<Vec<Project>>> {
        let provider = self.project_provider.clone();
        Arc::new(ResourceLoader::from_fn(move || {
            let provider = provider.clone();
            async move { provider.list().await }
        }))
    }

    /// Coordinator reconciling `loader` after project mutations.
    pub fn project_coordinator(
        &self,
        loader: Arc<ResourceLoader<Vec<Project>>>,
    ) -> MutationCoordinator<HttpProjectProvider> {
        MutationCoordinator::new(self.project_provider.clone(), loader)
    }

    /// Loader for the incoming-message list; one per owning view.
    pub fn message_loader(&self) -> Arc<ResourceLoader<Vec<ContactMessage>>> {
        let provider = self.message_provider.clone();
        Arc::new(ResourceLoader::from_fn(move || {
            let provider = provider.clone();
            async move { provider.list().await }
        }))
    }

    /// Loader for the site-owner profile.
    pub fn profile_loader(&self) -> Arc<ResourceLoader<Profile>> {
        let provider = self.profile_provider.clone();
        Arc::new(ResourceLoader::from_fn(move || {
            let provider = provider.clone();
            async move { provider.get().await }
        }))
    }
}
