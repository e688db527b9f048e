//! Admin user management.

use reqwest::Method;

use crate::error::Result;
use crate::http::HttpClient;
use crate::normalize::{self, Paginated};
use crate::resources::page_query;
use crate::types::{User, UserUpdate};

/// Façade over `/admin/users`. Every operation requires the admin role;
/// without it the backend answers 403 and the call surfaces
/// [`ApiError::Auth`](crate::ApiError::Auth).
pub struct UsersApi<'c> {
    pub(crate) http: &'c HttpClient,
}

impl UsersApi<'_> {
    /// List user accounts.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn list(&self, page: Option<u64>) -> Result<Paginated<User>> {
        let raw = self.http.get("/admin/users", &page_query(page)).await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Fetch one user account.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn get(&self, id: &str) -> Result<User> {
        let raw = self.http.get(&format!("/admin/users/{id}"), &[]).await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Update a user account; only the set fields change.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// fields, or the other classified kinds.
    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<User> {
        let raw = self
            .http
            .send_json(Method::PUT, &format!("/admin/users/{id}"), update)
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.http
            .send_empty(Method::DELETE, &format!("/admin/users/{id}"))
            .await?;
        Ok(())
    }
}
