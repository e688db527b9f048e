//! Organizer applications.
//!
//! A user applies once to become an organizer (donee); admins review the
//! application. The ID card image is mandatory and travels as a multipart
//! file part.

use reqwest::Method;

use crate::error::Result;
use crate::http::HttpClient;
use crate::normalize::{self, Paginated};
use crate::resources::page_query;
use crate::types::{FileUpload, NewOrganizerApplication, OrganizerApplication};

/// Multipart field name for the ID card scan.
const ID_CARD_FIELD: &str = "id_card_image";

/// Façade over `/organizer-applications` and the admin review endpoints.
pub struct ApplicationsApi<'c> {
    pub(crate) http: &'c HttpClient,
}

impl ApplicationsApi<'_> {
    /// Submit an organizer application with the ID card image.
    ///
    /// The backend allows one application per user; a second submission is
    /// rejected with a validation error.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// fields, or the other classified kinds.
    pub async fn create(
        &self,
        application: &NewOrganizerApplication,
        id_card: FileUpload,
    ) -> Result<OrganizerApplication> {
        let raw = self
            .http
            .send_multipart(
                Method::POST,
                "/organizer-applications",
                application.form_fields(),
                vec![(ID_CARD_FIELD.to_owned(), id_card)],
            )
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// The caller's own application, for showing review progress.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn mine(&self) -> Result<OrganizerApplication> {
        let raw = self.http.get("/organizer-applications", &[]).await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// List applications under review (admin).
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn list(&self, page: Option<u64>) -> Result<Paginated<OrganizerApplication>> {
        let raw = self
            .http
            .get("/admin/organizer-applications", &page_query(page))
            .await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Fetch one application (admin).
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn get(&self, id: &str) -> Result<OrganizerApplication> {
        let raw = self
            .http
            .get(&format!("/admin/organizer-applications/{id}"), &[])
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Approve an application (admin). Returns the authoritative record.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn approve(&self, id: &str) -> Result<OrganizerApplication> {
        let raw = self
            .http
            .send_empty(
                Method::POST,
                &format!("/admin/organizer-applications/{id}/approve"),
            )
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Reject an application (admin). Returns the authoritative record.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn reject(&self, id: &str) -> Result<OrganizerApplication> {
        let raw = self
            .http
            .send_empty(
                Method::POST,
                &format!("/admin/organizer-applications/{id}/reject"),
            )
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }
}
