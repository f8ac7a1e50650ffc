use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiSettings;
use crate::errors::ApiError;

/// Success envelope wrapping every backend payload: `{ "data": ... }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Body shape of non-2xx responses.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Thin JSON client over the portfolio REST backend.
///
/// Carries the session cookie jar; nothing else is persisted client-side.
/// Timeouts are the transport's own, none is imposed here.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ApiError::from)?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// POST where only the status matters (logout and friends).
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        self.send_unit(Method::POST, path).await
    }

    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, path).await
    }

    async fn execute<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn send_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "api request");

        let response = self.http.request(method, &url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }
        Ok(())
    }

    /// Map a non-2xx response, preferring the server's own message.
    async fn error_for(status: StatusCode, response: reqwest::Response) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        ApiError::api(status.as_u16(), message)
    }
}
