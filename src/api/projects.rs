use std::sync::Arc;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::providers::CollectionProvider;
use crate::types::{Project, ProjectDraft};

/// Project collection collaborator over `/projects`.
pub struct HttpProjectProvider {
    client: Arc<ApiClient>,
}

impl HttpProjectProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl CollectionProvider for HttpProjectProvider {
    type Entity = Project;
    type Draft = ProjectDraft;

    async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects").await
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.client.post("/projects", draft).await
    }

    async fn update(&self, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.client.put(&format!("/projects/{id}"), draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_unit(&format!("/projects/{id}")).await
    }
}
