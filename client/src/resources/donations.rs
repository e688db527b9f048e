//! Donation submission and history.
//!
//! Creation here is deliberately never retried by the client: a fund or
//! goods submission carries no dedup token, so a blind retry could double a
//! donation. A failed submission is reported to the caller as-is.

use reqwest::Method;

use crate::error::Result;
use crate::http::HttpClient;
use crate::normalize::{self, Paginated};
use crate::resources::page_query;
use crate::types::{
    DonatedBook, DonatedItem, FileUpload, Fund, NewDonatedBook, NewDonatedItem, NewFund,
};

/// Multipart field name for package photos; array-suffixed so the backend
/// collects repeated parts into one list.
const PHOTOS_FIELD: &str = "photos[]";

/// Façade over `/funds`, `/donated-items`, and `/donated-books`.
pub struct DonationsApi<'c> {
    pub(crate) http: &'c HttpClient,
}

impl DonationsApi<'_> {
    /// Donate money to a campaign.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// fields, or the other classified kinds.
    pub async fn create_fund(&self, fund: &NewFund) -> Result<Fund> {
        let raw = self.http.send_json(Method::POST, "/funds", fund).await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Donate goods to a campaign, with package photos.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// fields or an unparsable photo MIME type, or the other classified
    /// kinds.
    pub async fn create_donated_item(
        &self,
        item: &NewDonatedItem,
        photos: Vec<FileUpload>,
    ) -> Result<DonatedItem> {
        let files = photos
            .into_iter()
            .map(|photo| (PHOTOS_FIELD.to_owned(), photo))
            .collect();
        let raw = self
            .http
            .send_multipart(Method::POST, "/donated-items", item.form_fields(), files)
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Donate books to a campaign.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// fields, or the other classified kinds.
    pub async fn create_donated_book(&self, book: &NewDonatedBook) -> Result<DonatedBook> {
        let raw = self
            .http
            .send_json(Method::POST, "/donated-books", book)
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// The caller's fund donation history.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn funds(&self, page: Option<u64>) -> Result<Paginated<Fund>> {
        let raw = self.http.get("/funds", &page_query(page)).await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// The caller's goods donation history.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn donated_items(&self, page: Option<u64>) -> Result<Paginated<DonatedItem>> {
        let raw = self.http.get("/donated-items", &page_query(page)).await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// The caller's book donation history.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn donated_books(&self, page: Option<u64>) -> Result<Paginated<DonatedBook>> {
        let raw = self.http.get("/donated-books", &page_query(page)).await?;
        normalize::normalize_list(&raw).try_map()
    }
}
