//! Client entry point.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::resources::{ApplicationsApi, AuthApi, CampaignsApi, DonationsApi, UsersApi};
use crate::session::{MemorySessionStore, SessionStore};

/// The Caritas Aeterna API client.
///
/// Owns the HTTP adapter and the session store; resource façades are cheap
/// borrows created per call site. Independent façade calls may run
/// concurrently (e.g. joining a campaign's detail, funds, and item history
/// on one screen). Completions are unordered, and the only shared state is
/// the session store, which is read-only outside the auth flow.
///
/// Dropping a returned future cancels the in-flight request.
pub struct CaritasClient {
    http: HttpClient,
    store: Arc<dyn SessionStore>,
}

impl CaritasClient {
    /// Build a client with the default in-memory session store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`](crate::ApiError::Network) if the HTTP
    /// stack cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(MemorySessionStore::new()))
    }

    /// Build a client with an injected session store (e.g. one persisting to
    /// disk or browser storage).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`](crate::ApiError::Network) if the HTTP
    /// stack cannot be constructed.
    pub fn with_store(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let http = HttpClient::new(config, Arc::clone(&store))?;
        Ok(Self { http, store })
    }

    /// The session store, for reading the current session or subscribing to
    /// login/logout changes. Application code must not write it directly;
    /// [`AuthApi`] is the designated writer.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Authentication operations.
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi {
            http: &self.http,
            store: &self.store,
        }
    }

    /// Campaign browsing and management.
    #[must_use]
    pub fn campaigns(&self) -> CampaignsApi<'_> {
        CampaignsApi { http: &self.http }
    }

    /// Donation submission and history.
    #[must_use]
    pub fn donations(&self) -> DonationsApi<'_> {
        DonationsApi { http: &self.http }
    }

    /// Admin user management.
    #[must_use]
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { http: &self.http }
    }

    /// Organizer applications.
    #[must_use]
    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi { http: &self.http }
    }
}
