use std::sync::Arc;

use super::client::ApiClient;
use crate::errors::ApiError;
use crate::providers::MessageProvider;
use crate::types::ContactMessage;

/// Read-only contact-message collaborator over `/contact`.
pub struct HttpMessageProvider {
    client: Arc<ApiClient>,
}

impl HttpMessageProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl MessageProvider for HttpMessageProvider {
    async fn list(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.client.get("/contact").await
    }
}
