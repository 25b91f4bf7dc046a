use reqwest::Method;
use tracing::info;

use super::{ApiClient, ApiError, Credentials, Id, LoginResponse, Registration, User, UserUpdate};

impl ApiClient {
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let req = self.request(Method::POST, "/register").json(registration);
        self.execute(req).await?;
        info!("Registered account for {}", registration.email);
        Ok(())
    }

    /// `POST /login`. A 401 reads as "Invalid credentials"; a success body
    /// without a token is rejected as malformed.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let req = self.request(Method::POST, "/login").json(credentials);
        let resp: LoginResponse = self.fetch(req).await.map_err(|e| match e {
            ApiError::Auth(_) => ApiError::Auth("Invalid credentials".to_string()),
            other => other,
        })?;

        match resp.token.as_deref() {
            Some(t) if !t.is_empty() => Ok(resp),
            _ => Err(ApiError::Auth("Invalid response from server".to_string())),
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, "/logout")).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(self.request(Method::GET, "/user")).await
    }

    pub async fn update_user(&self, id: Id, update: &UserUpdate) -> Result<(), ApiError> {
        let req = self.request(Method::POST, &format!("/user/{}", id)).json(update);
        self.execute(req).await
    }

    /// The server re-checks the supplied credentials before deleting.
    pub async fn delete_user(&self, id: Id, confirmation: &Credentials) -> Result<(), ApiError> {
        let req = self
            .request(Method::DELETE, &format!("/user/{}", id))
            .json(confirmation);
        self.execute(req).await
    }
}
