//! Typed wrapper over the cinema REST API.
//!
//! Every call goes through [`ApiClient`], which attaches the stored bearer
//! token and turns non-2xx responses into [`ApiError`]. Endpoints are grouped
//! by resource in the submodules.

mod auth;
mod bookings;
mod error;
mod films;
mod sessions;
pub mod types;

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::storage::{BrowserTokenStore, TokenStore};

pub use error::ApiError;
pub use types::*;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: BrowserTokenStore,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            tokens: BrowserTokenStore::new(config.token_key.clone()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        let req = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and decode a JSON body.
    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = Self::checked(req).await?;
        Ok(resp.json::<T>().await?)
    }

    /// Send and ignore whatever body comes back.
    async fn execute(&self, req: RequestBuilder) -> Result<(), ApiError> {
        Self::checked(req).await.map(|_| ())
    }

    async fn checked(req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        warn!("Request rejected with {}: {}", status, err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig {
            api_base_url: "https://cinema.example/api".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/film/3"), "https://cinema.example/api/film/3");
    }
}
