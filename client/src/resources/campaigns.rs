//! Campaign operations.

use reqwest::Method;
use serde_json::json;

use crate::error::Result;
use crate::http::HttpClient;
use crate::normalize::{self, Paginated};
use crate::resources::page_query;
use crate::types::{
    Campaign, CampaignDonation, CampaignFilter, CampaignStatus, FileUpload, Fund, NewCampaign,
    RequestedBook, RequestedSupply,
};

/// Multipart field name for the campaign header image.
const HEADER_IMAGE_FIELD: &str = "header_image";

/// Façade over `/campaigns` and the admin campaign endpoints.
pub struct CampaignsApi<'c> {
    pub(crate) http: &'c HttpClient,
}

impl CampaignsApi<'_> {
    /// List campaigns, optionally filtered by kind, search text, and page.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn list(&self, filter: &CampaignFilter) -> Result<Paginated<Campaign>> {
        let raw = self.http.get("/campaigns", &filter.to_query()).await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Fetch one campaign.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn get(&self, id: &str) -> Result<Campaign> {
        let raw = self.http.get(&format!("/campaigns/{id}"), &[]).await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Create a campaign, with an optional header image.
    ///
    /// With an image the request goes out as multipart; without one as JSON.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`](crate::ApiError::Validation) on rejected
    /// fields, or the other classified kinds.
    pub async fn create(
        &self,
        campaign: &NewCampaign,
        header_image: Option<FileUpload>,
    ) -> Result<Campaign> {
        let raw = match header_image {
            Some(image) => {
                self.http
                    .send_multipart(
                        Method::POST,
                        "/campaigns",
                        campaign.form_fields(),
                        vec![(HEADER_IMAGE_FIELD.to_owned(), image)],
                    )
                    .await?
            }
            None => self.http.send_json(Method::POST, "/campaigns", campaign).await?,
        };
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Fund donation history of a campaign.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn funds(&self, id: &str, page: Option<u64>) -> Result<Paginated<Fund>> {
        let raw = self
            .http
            .get(&format!("/campaigns/{id}/funds"), &page_query(page))
            .await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Supplies a product-donation campaign asks for.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn requested_supplies(&self, id: &str) -> Result<Paginated<RequestedSupply>> {
        let raw = self
            .http
            .get(&format!("/campaigns/{id}/requested-supplies"), &[])
            .await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Book titles a campaign asks for.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn requested_books(&self, id: &str) -> Result<Paginated<RequestedBook>> {
        let raw = self
            .http
            .get(&format!("/campaigns/{id}/requested-books"), &[])
            .await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Mixed donation feed (money and goods) of a campaign.
    ///
    /// # Errors
    ///
    /// One of the classified [`ApiError`](crate::ApiError) kinds.
    pub async fn donations(
        &self,
        id: &str,
        page: Option<u64>,
    ) -> Result<Paginated<CampaignDonation>> {
        let raw = self
            .http
            .get(&format!("/campaigns/{id}/donations"), &page_query(page))
            .await?;
        normalize::normalize_list(&raw).try_map()
    }

    /// Request a status transition (admin approval/rejection/closing).
    ///
    /// Transitions are enforced server-side and are not reversible; the
    /// returned record carries the authoritative status, which may differ
    /// from the requested one.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`](crate::ApiError::Auth) without the admin role, or
    /// the other classified kinds.
    pub async fn update_status(&self, id: &str, status: CampaignStatus) -> Result<Campaign> {
        let raw = self
            .http
            .send_json(
                Method::PUT,
                &format!("/admin/campaigns/{id}/status"),
                &json!({ "status": status.as_str() }),
            )
            .await?;
        normalize::decode(normalize::normalize_item(raw))
    }

    /// Delete a campaign (admin).
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`](crate::ApiError::Auth) without the admin role, or
    /// the other classified kinds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.http
            .send_empty(Method::DELETE, &format!("/campaigns/{id}"))
            .await?;
        Ok(())
    }
}
