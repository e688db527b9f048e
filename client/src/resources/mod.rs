//! Typed resource façade.
//!
//! One module per backend resource. Each function accepts typed parameters,
//! goes through the HTTP adapter, runs the result through the normalizer,
//! and returns a typed value or the adapter's classified error unchanged,
//! never swallowed and never retried. The façade holds no cache: freshness is
//! achieved by re-querying.

mod applications;
mod auth;
mod campaigns;
mod donations;
mod users;

pub use applications::ApplicationsApi;
pub use auth::AuthApi;
pub use campaigns::CampaignsApi;
pub use donations::DonationsApi;
pub use users::UsersApi;

/// Query parameters for a paginated endpoint.
pub(crate) fn page_query(page: Option<u64>) -> Vec<(String, String)> {
    page.map(|p| vec![("page".to_owned(), p.to_string())])
        .unwrap_or_default()
}
