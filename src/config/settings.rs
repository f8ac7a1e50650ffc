use std::env;

/// Backend location for the HTTP collaborators.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

impl ApiSettings {
    /// Read from `PORTFOLIO_API_URL`, falling back to the local dev backend.
    pub fn from_env() -> Self {
        let base_url = env::var("PORTFOLIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        Self { base_url }
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Route anchors shared by session navigation and the route guard.
#[derive(Debug, Clone)]
pub struct RoutePaths {
    /// Prefix of the credential-gated area.
    pub admin_prefix: String,
    /// The login surface; never guarded, target of logout redirects.
    pub login: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            admin_prefix: "/admin".to_string(),
            login: "/admin/login".to_string(),
        }
    }
}

impl RoutePaths {
    pub fn in_admin_area(&self, path: &str) -> bool {
        path.starts_with(&self.admin_prefix)
    }
}
