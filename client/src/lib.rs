//! # Caritas Aeterna API Client
//!
//! Typed Rust client for the Caritas Aeterna donation platform REST API:
//! campaign browsing, fund and in-kind donations, organizer applications,
//! and the admin endpoints behind them.
//!
//! The backend wraps payloads in inconsistent envelopes (bare arrays,
//! `{"data": [...]}`, and a doubly-nested paginator). This crate absorbs
//! that in one place, the [`normalize`] module, and guarantees every
//! consumer the canonical [`Paginated`] shape, so list handling code can
//! always iterate safely.
//!
//! ## Example
//!
//! ```no_run
//! use caritas_client::{CampaignFilter, CampaignKind, CaritasClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CaritasClient::new(ClientConfig::new("https://caritas.example.org"))?;
//!
//!     let fundraisers = client
//!         .campaigns()
//!         .list(&CampaignFilter {
//!             kind: Some(CampaignKind::Fundraiser),
//!             ..CampaignFilter::default()
//!         })
//!         .await?;
//!
//!     for campaign in &fundraisers.items {
//!         println!("{}: {:?}", campaign.attributes.title, campaign.attributes.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every failure is classified into exactly one [`ApiError`] kind before it
//! reaches the caller: [`ApiError::Network`], [`ApiError::Auth`],
//! [`ApiError::Validation`], or [`ApiError::Server`]. Nothing is retried
//! automatically; donation submissions are not idempotent.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod resources;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use client::CaritasClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result, ValidationErrors};
pub use normalize::{PageMeta, Paginated};
pub use resources::{ApplicationsApi, AuthApi, CampaignsApi, DonationsApi, UsersApi};
pub use session::{MemorySessionStore, Session, SessionStore};
pub use types::{
    ApplicationStatus, Campaign, CampaignAttributes, CampaignDonation, CampaignFilter,
    CampaignKind, CampaignRelationships, CampaignStatus, Credentials, DonatedBook, DonatedItem,
    DonationStatus, FileUpload, Fund, NewCampaign, NewDonatedBook, NewDonatedItem, NewFund,
    NewOrganizerApplication, Organizer, OrganizerApplication, OrganizerAttributes, Registration,
    RequestedBook, RequestedSupply, User, UserSummary, UserUpdate,
};
