//! Authentication operations.
//!
//! This is the designated writer of the session store: `login` and
//! `register` set it, `logout` clears it. Receiving an
//! [`ApiError::Auth`](crate::ApiError::Auth) anywhere else never touches the
//! store; deciding to log the user out belongs to the caller.

use std::sync::Arc;

use reqwest::Method;

use crate::error::{ApiError, Result};
use crate::http::HttpClient;
use crate::normalize;
use crate::session::{Session, SessionStore};
use crate::types::{Credentials, Registration, User};

/// Façade over `/login`, `/register`, `/logout`, and `/user`.
pub struct AuthApi<'c> {
    pub(crate) http: &'c HttpClient,
    pub(crate) store: &'c Arc<dyn SessionStore>,
}

impl AuthApi<'_> {
    /// Log in and persist the resulting session in the store.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// credentials fields, [`ApiError::Auth`](crate::ApiError::Auth) on a
    /// wrong email/password pair, or the other classified kinds.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let raw = self.http.send_json(Method::POST, "/login", credentials).await?;
        let session: Session = normalize::decode(normalize::normalize_item(raw))?;
        self.store.set(session.clone());
        Ok(session)
    }

    /// Register a new account and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Same as [`AuthApi::login`].
    pub async fn register(&self, registration: &Registration) -> Result<Session> {
        let raw = self
            .http
            .send_json(Method::POST, "/register", registration)
            .await?;
        let session: Session = normalize::decode(normalize::normalize_item(raw))?;
        self.store.set(session.clone());
        Ok(session)
    }

    /// Log out and clear the session store.
    ///
    /// The store is cleared even when the backend answers 401/403: the
    /// token was already dead, which is not a failure to log out.
    ///
    /// # Errors
    ///
    /// Network and server errors are reported; the store is cleared
    /// regardless.
    pub async fn logout(&self) -> Result<()> {
        let result = self.http.send_empty(Method::POST, "/logout").await;
        self.store.clear();
        match result {
            Ok(_) | Err(ApiError::Auth { .. }) => Ok(()),
            Err(other) => Err(other),
        }
    }

    /// Fetch the authenticated user's record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`](crate::ApiError::Auth) when the session is
    /// invalid, or the other classified kinds.
    pub async fn current_user(&self) -> Result<User> {
        let raw = self.http.get("/user", &[]).await?;
        normalize::decode(normalize::normalize_item(raw))
    }
}
