//! # API crate — typed REST client for the recipe platform backend
//!
//! One async method per backend endpoint, all returning
//! `Result<T, ApiError>`. The client attaches `Authorization: Bearer <token>`
//! whenever the session store holds a session and omits the header otherwise
//! (several endpoints are public). It never retries, never refreshes tokens,
//! and treats 401/403 like any other failure — callers catch errors and show
//! them inline.
//!
//! ## Operations
//!
//! - **Auth**: `login`, `register`
//! - **Recipes**: `list_recipes`, `search_recipes`, `recipes_by_category`,
//!   `feed`, `top_rated`, `recipe`, `create_recipe`, `update_recipe`,
//!   `delete_recipe`
//! - **Comments**: `comments`, `add_comment`, `delete_comment`
//! - **Ratings**: `average_rating`, `rate_recipe`
//! - **Follows**: `follow`, `unfollow`, `follow_status`
//! - **Admin**: `list_users`, `user`, `user_recipes`, `delete_user`
//! - **Profile**: `my_recipes`, `my_comments`, `my_ratings`

use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use store::SessionStore;

pub mod config;
mod error;
pub mod models;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AverageRating, Category, Comment, CommentRequest, FollowStatus, LoginRequest, LoginResponse,
    RatingEntry, RatingRequest, Recipe, RecipeForm, RecipeRef, RecipeSummary, RegisterRequest,
    UserAccount, UserRef,
};
pub use models::{display_rating, format_category_label};

/// HTTP client for the backend, sharing one session store with the rest of
/// the app so the bearer credential is read at request time, not cached.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    sessions: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            sessions,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Attach the bearer token when a session is present.
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.sessions.load() {
            Some(session) => builder.bearer_auth(session.token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::debug!("transport failure: {err}");
            ApiError::transport(err)
        })?;
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(ApiError::transport)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::status(status.as_u16(), &body))
        }
    }

    /// Like [`Self::send`] but for endpoints with empty success bodies
    /// (DELETEs answering 204, follow/unfollow answering 200).
    async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::debug!("transport failure: {err}");
            ApiError::transport(err)
        })?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::status(status.as_u16(), &body))
        }
    }

    // --- Auth ---

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send(self.http.post(self.url("/api/auth/login")).json(&request))
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_unit(self.http.post(self.url("/api/auth/register")).json(request))
            .await
    }

    // --- Recipes ---

    pub async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/recipes"))))
            .await
    }

    pub async fn search_recipes(&self, keyword: &str) -> Result<Vec<RecipeSummary>, ApiError> {
        let builder = self
            .http
            .get(self.url("/api/recipes/search"))
            .query(&[("keyword", keyword)]);
        self.send(self.authed(builder)).await
    }

    pub async fn recipes_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<RecipeSummary>, ApiError> {
        let path = format!("/api/recipes/category/{}", category.code());
        self.send(self.authed(self.http.get(self.url(&path)))).await
    }

    /// Recipes from cooks the current user follows. Auth required.
    pub async fn feed(&self) -> Result<Vec<RecipeSummary>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/recipes/feed"))))
            .await
    }

    pub async fn top_rated(&self) -> Result<Vec<RecipeSummary>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/recipes/top-rated"))))
            .await
    }

    /// The bearer is optional here; the backend personalizes when present.
    pub async fn recipe(&self, id: i64) -> Result<Recipe, ApiError> {
        let path = format!("/api/recipes/{id}");
        self.send(self.authed(self.http.get(self.url(&path)))).await
    }

    pub async fn create_recipe(&self, form: &RecipeForm) -> Result<Recipe, ApiError> {
        self.send(self.authed(self.http.post(self.url("/api/recipes")).json(form)))
            .await
    }

    pub async fn update_recipe(&self, id: i64, form: &RecipeForm) -> Result<Recipe, ApiError> {
        let path = format!("/api/recipes/{id}");
        self.send(self.authed(self.http.put(self.url(&path)).json(form)))
            .await
    }

    pub async fn delete_recipe(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/api/recipes/{id}");
        self.send_unit(self.authed(self.http.delete(self.url(&path))))
            .await
    }

    // --- Comments ---

    pub async fn comments(&self, recipe_id: i64) -> Result<Vec<Comment>, ApiError> {
        let path = format!("/api/recipes/{recipe_id}/comments");
        self.send(self.http.get(self.url(&path))).await
    }

    pub async fn add_comment(&self, recipe_id: i64, content: &str) -> Result<Comment, ApiError> {
        let path = format!("/api/recipes/{recipe_id}/comments");
        let request = CommentRequest {
            content: content.to_string(),
        };
        self.send(self.authed(self.http.post(self.url(&path)).json(&request)))
            .await
    }

    pub async fn delete_comment(&self, recipe_id: i64, comment_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/recipes/{recipe_id}/comments/{comment_id}");
        self.send_unit(self.authed(self.http.delete(self.url(&path))))
            .await
    }

    // --- Ratings ---

    pub async fn average_rating(&self, recipe_id: i64) -> Result<f64, ApiError> {
        let path = format!("/api/recipes/{recipe_id}/ratings/average");
        let average: AverageRating = self.send(self.http.get(self.url(&path))).await?;
        Ok(average.average_rating)
    }

    pub async fn rate_recipe(&self, recipe_id: i64, score: u8) -> Result<(), ApiError> {
        let path = format!("/api/recipes/{recipe_id}/ratings");
        let request = RatingRequest { score };
        self.send_unit(self.authed(self.http.post(self.url(&path)).json(&request)))
            .await
    }

    // --- Follows ---

    pub async fn follow(&self, cook_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/follow/{cook_id}");
        self.send_unit(self.authed(self.http.post(self.url(&path))))
            .await
    }

    pub async fn unfollow(&self, cook_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/follow/{cook_id}");
        self.send_unit(self.authed(self.http.delete(self.url(&path))))
            .await
    }

    pub async fn follow_status(&self, cook_id: i64) -> Result<bool, ApiError> {
        let path = format!("/api/follow/{cook_id}/status");
        let status: FollowStatus = self.send(self.authed(self.http.get(self.url(&path)))).await?;
        Ok(status.is_following)
    }

    // --- Admin ---

    pub async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/users"))))
            .await
    }

    pub async fn user(&self, id: i64) -> Result<UserAccount, ApiError> {
        let path = format!("/api/users/{id}");
        self.send(self.authed(self.http.get(self.url(&path)))).await
    }

    pub async fn user_recipes(&self, id: i64) -> Result<Vec<RecipeSummary>, ApiError> {
        let path = format!("/api/users/{id}/recipes");
        self.send(self.authed(self.http.get(self.url(&path)))).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/api/users/{id}");
        self.send_unit(self.authed(self.http.delete(self.url(&path))))
            .await
    }

    // --- Profile ---

    pub async fn my_recipes(&self) -> Result<Vec<RecipeSummary>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/profile/my-recipes"))))
            .await
    }

    pub async fn my_comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/profile/my-comments"))))
            .await
    }

    pub async fn my_ratings(&self) -> Result<Vec<RatingEntry>, ApiError> {
        self.send(self.authed(self.http.get(self.url("/api/profile/my-ratings"))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, Role, Session};

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new(
            ApiConfig::with_base_url("http://backend:8080/"),
            Arc::new(MemoryStore::new()),
        );
        assert_eq!(client.url("/api/recipes"), "http://backend:8080/api/recipes");
        assert_eq!(
            client.url("/api/recipes/7/comments/3"),
            "http://backend:8080/api/recipes/7/comments/3"
        );
    }

    #[test]
    fn bearer_is_read_from_the_session_store_at_request_time() {
        let sessions = Arc::new(MemoryStore::new());
        let client = ApiClient::new(ApiConfig::default(), sessions.clone());

        let request = client
            .authed(client.http.get(client.url("/api/recipes")))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());

        sessions.save(&Session::new("tok-42".into(), 1, "u".into(), Role::User));
        let request = client
            .authed(client.http.get(client.url("/api/recipes")))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-42"
        );

        sessions.clear();
        let request = client
            .authed(client.http.get(client.url("/api/recipes")))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }
}
