use reqwest::Method;

use super::{ApiClient, ApiError, Id, NewSession, Session};

impl ApiClient {
    pub async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.fetch(self.request(Method::GET, "/session")).await
    }

    /// Session with its seat map; the entry point of a booking.
    pub async fn get_session(&self, id: Id) -> Result<Session, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/session/{}", id)))
            .await
    }

    pub async fn sessions_for_film(&self, film_id: Id) -> Result<Vec<Session>, ApiError> {
        let req = self
            .request(Method::GET, "/session")
            .query(&[("film_id", film_id)]);
        self.fetch(req).await
    }

    pub async fn sessions_by_type(&self, kind: &str) -> Result<Vec<Session>, ApiError> {
        let req = self.request(Method::GET, "/sessions").query(&[("type", kind)]);
        self.fetch(req).await
    }

    pub async fn create_session(&self, session: &NewSession) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, "/session").json(session))
            .await
    }
}
