//! JSON-over-HTTP client for a single downstream service.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tupermiso_core::service::ServiceKind;

use crate::error::RegistryError;

/// HTTP client bound to one service's base URL.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    service: ServiceKind,
    base_url: String,
}

impl ServiceClient {
    /// Reuse an existing [`reqwest::Client`] so every service shares one
    /// connection pool.
    pub fn with_client(
        client: reqwest::Client,
        service: ServiceKind,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service,
            base_url: base_url.into(),
        }
    }

    /// `GET {base_url}{path}` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RegistryError> {
        tracing::debug!(service = %self.service, path, "GET upstream");
        let response = self.client.get(self.url(path)).send().await?;
        self.parse_response(response).await
    }

    /// `GET {base_url}{path}?{query}` and decode the JSON body.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, RegistryError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!(service = %self.service, path, "GET upstream");
        let response = self.client.get(self.url(path)).query(query).send().await?;
        self.parse_response(response).await
    }

    /// `POST {base_url}{path}` with a JSON body and decode the JSON reply.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RegistryError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(service = %self.service, path, "POST upstream");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Return the response unchanged on 2xx, or a [`RegistryError::Status`]
    /// carrying the status and body text.
    async fn ensure_success(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RegistryError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(service = %self.service, status = status.as_u16(), "Upstream returned an error");
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RegistryError> {
        let response = self.ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
