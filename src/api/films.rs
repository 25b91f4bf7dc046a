use reqwest::Method;

use super::{AdminStats, ApiClient, ApiError, Film, FilmInput, Id};

impl ApiClient {
    pub async fn list_films(&self) -> Result<Vec<Film>, ApiError> {
        self.fetch(self.request(Method::GET, "/film")).await
    }

    pub async fn get_film(&self, id: Id) -> Result<Film, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/film/{}", id)))
            .await
    }

    pub async fn create_film(&self, film: &FilmInput) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, "/film").json(film))
            .await
    }

    pub async fn update_film(&self, id: Id, film: &FilmInput) -> Result<(), ApiError> {
        let req = self.request(Method::PUT, &format!("/film/{}", id)).json(film);
        self.execute(req).await
    }

    pub async fn delete_film(&self, id: Id) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &format!("/film/{}", id)))
            .await
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.fetch(self.request(Method::GET, "/admin/stats")).await
    }
}
