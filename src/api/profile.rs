use std::sync::Arc;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::providers::ProfileProvider;
use crate::types::{Profile, ProfileDraft};

/// Site-owner profile collaborator over `/profile`.
pub struct HttpProfileProvider {
    client: Arc<ApiClient>,
}

impl HttpProfileProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl ProfileProvider for HttpProfileProvider {
    async fn get(&self) -> Result<Profile, ApiError> {
        self.client.get("/profile").await
    }

    async fn update(&self, draft: &ProfileDraft) -> Result<Profile, ApiError> {
        self.client.put("/profile", draft).await
    }
}
