//! Wire DTOs for the Caritas Aeterna backend.
//!
//! Entity attributes arrive camel-cased (`requestedFundAmount`), while
//! paginator fields are snake-cased (`current_page`). The serde attributes
//! below mirror the wire exactly rather than papering over it. All records
//! are data the backend owns; the client never derives authoritative state
//! from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimal user identity carried inside a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

/// A full user record as returned by `/user` and the admin user endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Role names granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Account creation time, when the endpoint reports it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Campaign category: collecting money or collecting goods.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    /// Monetary fundraiser.
    Fundraiser,
    /// In-kind goods collection.
    ProductDonation,
}

impl CampaignKind {
    /// Wire representation, for query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fundraiser => "fundraiser",
            Self::ProductDonation => "product_donation",
        }
    }
}

/// Campaign lifecycle status.
///
/// Transitions happen server-side: `pending → on_progress → finished`, with
/// `pending → rejected` as the alternate terminal state. The client displays
/// the status and requests transitions; it never assumes one succeeded
/// without re-reading the record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Awaiting admin approval.
    Pending,
    /// Approved and collecting donations.
    OnProgress,
    /// Goal reached or closed by the organizer.
    Finished,
    /// Rejected by an admin; terminal.
    Rejected,
}

impl CampaignStatus {
    /// Wire representation, for status-update payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::OnProgress => "on_progress",
            Self::Finished => "finished",
            Self::Rejected => "rejected",
        }
    }
}

/// A donation campaign.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    /// Backend identifier.
    pub id: String,
    /// Campaign category.
    #[serde(rename = "type")]
    pub kind: CampaignKind,
    /// Campaign attributes.
    pub attributes: CampaignAttributes,
    /// Related records, when the endpoint includes them.
    #[serde(default)]
    pub relationships: Option<CampaignRelationships>,
}

/// Attribute block of a [`Campaign`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAttributes {
    /// Campaign title.
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Header image URL, when one was uploaded.
    #[serde(default)]
    pub header_image_url: Option<String>,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Fund goal for fundraisers.
    #[serde(default)]
    pub requested_fund_amount: Option<f64>,
    /// Funds donated so far.
    #[serde(default)]
    pub donated_fund_amount: Option<f64>,
    /// Goods goal for product-donation campaigns.
    #[serde(default)]
    pub requested_item_quantity: Option<u64>,
    /// Goods donated so far.
    #[serde(default)]
    pub donated_item_quantity: Option<u64>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Attributes this client does not model; kept so nothing is dropped on
    /// re-serialization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Relationship block of a [`Campaign`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CampaignRelationships {
    /// The organizer (donee) who runs the campaign.
    #[serde(default)]
    pub organizer: Option<Organizer>,
}

/// Campaign organizer as embedded in campaign responses.
///
/// Some backend versions send the attribute block under the misspelled key
/// `attriutes`, and some flatten `name` to the top level. Both are accepted
/// as-is; [`Organizer::display_name`] picks whichever is present. The
/// discrepancy is an upstream inconsistency and is deliberately not
/// re-written into a single shape here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Organizer {
    /// Backend identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Nested attribute block (canonical shape).
    #[serde(default, alias = "attriutes")]
    pub attributes: Option<OrganizerAttributes>,
    /// Flat name (legacy shape).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Organizer {
    /// The organizer's name from whichever shape the backend sent.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .or(self.name.as_deref())
    }
}

/// Nested attributes of an [`Organizer`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrganizerAttributes {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Verification status of a donation record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    /// Submitted, awaiting verification.
    Pending,
    /// Verified by an admin.
    Verified,
    /// Rejected by an admin.
    Rejected,
}

/// A monetary donation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Backend identifier.
    pub id: String,
    /// The campaign this donation belongs to.
    pub campaign_id: String,
    /// Donor account, absent for anonymous donations.
    #[serde(default)]
    pub donor_id: Option<String>,
    /// Donor display name, absent for anonymous donations.
    #[serde(default)]
    pub donor_name: Option<String>,
    /// Donated amount.
    pub amount: f64,
    /// Verification status.
    pub status: DonationStatus,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An in-kind goods donation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonatedItem {
    /// Backend identifier.
    pub id: String,
    /// The campaign this donation belongs to.
    pub campaign_id: String,
    /// Donor account, absent for anonymous donations.
    #[serde(default)]
    pub donor_id: Option<String>,
    /// Donor display name, absent for anonymous donations.
    #[serde(default)]
    pub donor_name: Option<String>,
    /// What is being donated.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of items.
    pub quantity: u64,
    /// Photos of the package, uploaded at submission time.
    #[serde(default)]
    pub photo_urls: Vec<String>,
    /// Verification status.
    pub status: DonationStatus,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A book donation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonatedBook {
    /// Backend identifier.
    pub id: String,
    /// The campaign this donation belongs to.
    pub campaign_id: String,
    /// Donor account, absent for anonymous donations.
    #[serde(default)]
    pub donor_id: Option<String>,
    /// Donor display name, absent for anonymous donations.
    #[serde(default)]
    pub donor_name: Option<String>,
    /// Book title.
    pub title: String,
    /// Number of copies.
    pub quantity: u64,
    /// Verification status.
    pub status: DonationStatus,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry of a campaign's mixed donation feed: either money or goods,
/// with the irrelevant fields absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDonation {
    /// Backend identifier.
    pub id: String,
    /// Donor display name, absent for anonymous donations.
    #[serde(default)]
    pub donor_name: Option<String>,
    /// Amount, for fund donations.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Quantity, for goods donations.
    #[serde(default)]
    pub quantity: Option<u64>,
    /// Verification status.
    pub status: DonationStatus,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A supply item a product-donation campaign asks for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestedSupply {
    /// Backend identifier.
    pub id: String,
    /// Supply name.
    pub name: String,
    /// Requested quantity.
    pub quantity: u64,
    /// Quantity fulfilled so far.
    #[serde(default)]
    pub fulfilled_quantity: Option<u64>,
}

/// A book title a campaign asks for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestedBook {
    /// Backend identifier.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Author, when known.
    #[serde(default)]
    pub author: Option<String>,
    /// Requested number of copies.
    pub quantity: u64,
}

/// Status of an organizer application.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Approved; the user may organize campaigns.
    Approved,
    /// Rejected; terminal.
    Rejected,
}

/// An application to become a campaign organizer (donee).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerApplication {
    /// Backend identifier.
    pub id: String,
    /// The applying user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Legal name as on the ID card.
    pub full_name: String,
    /// National ID card number.
    #[serde(default)]
    pub id_card_number: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Province.
    #[serde(default)]
    pub province: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// ID card image URL, uploaded at submission time.
    #[serde(default)]
    pub id_card_image_url: Option<String>,
    /// Review status.
    pub status: ApplicationStatus,
    /// Submission time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// Request payloads sent to the backend.

/// Login credentials.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Password repeated, checked server-side.
    pub password_confirmation: String,
}

/// Payload for creating a campaign.
#[derive(Clone, Debug, Serialize)]
pub struct NewCampaign {
    /// Campaign category.
    #[serde(rename = "type")]
    pub kind: CampaignKind,
    /// Campaign title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Fund goal; required for fundraisers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_fund_amount: Option<f64>,
    /// Goods goal; required for product-donation campaigns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_item_quantity: Option<u64>,
}

impl NewCampaign {
    /// Text fields for the multipart form used when a header image is
    /// attached.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("type".to_owned(), self.kind.as_str().to_owned()),
            ("title".to_owned(), self.title.clone()),
            ("description".to_owned(), self.description.clone()),
        ];
        if let Some(amount) = self.requested_fund_amount {
            fields.push(("requested_fund_amount".to_owned(), amount.to_string()));
        }
        if let Some(quantity) = self.requested_item_quantity {
            fields.push(("requested_item_quantity".to_owned(), quantity.to_string()));
        }
        fields
    }
}

/// Payload for donating money to a campaign.
#[derive(Clone, Debug, Serialize)]
pub struct NewFund {
    /// Target campaign.
    pub campaign_id: String,
    /// Donated amount.
    pub amount: f64,
    /// Name to display; omit to donate anonymously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
}

/// Payload for donating goods to a campaign. Package photos travel as
/// multipart file parts beside these fields.
#[derive(Clone, Debug, Serialize)]
pub struct NewDonatedItem {
    /// Target campaign.
    pub campaign_id: String,
    /// What is being donated.
    pub description: String,
    /// Number of items.
    pub quantity: u64,
    /// Name to display; omit to donate anonymously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
}

impl NewDonatedItem {
    /// Text fields for the multipart form.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("campaign_id".to_owned(), self.campaign_id.clone()),
            ("description".to_owned(), self.description.clone()),
            ("quantity".to_owned(), self.quantity.to_string()),
        ];
        if let Some(donor_name) = &self.donor_name {
            fields.push(("donor_name".to_owned(), donor_name.clone()));
        }
        fields
    }
}

/// Payload for donating books to a campaign.
#[derive(Clone, Debug, Serialize)]
pub struct NewDonatedBook {
    /// Target campaign.
    pub campaign_id: String,
    /// Book title.
    pub title: String,
    /// Number of copies.
    pub quantity: u64,
    /// Name to display; omit to donate anonymously.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
}

/// Payload for applying to become an organizer. The ID card image travels as
/// a multipart file part beside these fields.
#[derive(Clone, Debug, Serialize)]
pub struct NewOrganizerApplication {
    /// Legal name as on the ID card.
    pub full_name: String,
    /// National ID card number.
    pub id_card_number: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Province.
    pub province: String,
    /// Postal code.
    pub postal_code: String,
    /// Contact phone number.
    pub phone: String,
}

impl NewOrganizerApplication {
    /// Text fields for the multipart form.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("full_name".to_owned(), self.full_name.clone()),
            ("id_card_number".to_owned(), self.id_card_number.clone()),
            ("address".to_owned(), self.address.clone()),
            ("city".to_owned(), self.city.clone()),
            ("province".to_owned(), self.province.clone()),
            ("postal_code".to_owned(), self.postal_code.clone()),
            ("phone".to_owned(), self.phone.clone()),
        ]
    }
}

/// Partial update of a user record (admin).
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New account email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement role list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Filter for the campaign list.
#[derive(Clone, Debug, Default)]
pub struct CampaignFilter {
    /// Restrict to one campaign category.
    pub kind: Option<CampaignKind>,
    /// Free-text search over titles.
    pub search: Option<String>,
    /// Page to fetch (1-based).
    pub page: Option<u64>,
}

impl CampaignFilter {
    /// Query parameters in wire form.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.kind {
            query.push(("type".to_owned(), kind.as_str().to_owned()));
        }
        if let Some(search) = &self.search {
            query.push(("search".to_owned(), search.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_owned(), page.to_string()));
        }
        query
    }
}

/// A binary file attached to a multipart request: header images, package
/// photos, ID card scans.
#[derive(Clone, Debug)]
pub struct FileUpload {
    /// File name reported to the backend.
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`.
    pub mime: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Create an upload from raw bytes.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}
