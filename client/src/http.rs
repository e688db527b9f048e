//! HTTP client adapter.
//!
//! Single point of contact with the backend. Cross-cutting concerns live
//! here so no façade function duplicates them: bearer-token attachment from
//! the session store, the one-time CSRF cookie fetch with `X-XSRF-TOKEN`
//! echo on mutating requests, JSON/multipart body construction, the explicit
//! request timeout, and classification of every failure into exactly one
//! [`ApiError`] kind.
//!
//! Nothing here retries. Donation submissions are not idempotent, so a
//! failed mutation is reported and the decision to resubmit stays with the
//! user.

use std::sync::Arc;

use reqwest::header::{ACCEPT, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result, ValidationErrors};
use crate::session::SessionStore;
use crate::types::FileUpload;

/// Header echoing the CSRF cookie on mutating requests.
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Cookie issued by the CSRF endpoint.
const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// The adapter around [`reqwest::Client`].
///
/// Cheap to share behind the [`CaritasClient`](crate::CaritasClient) entry
/// point; all façade modules borrow one instance.
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn SessionStore>,
    csrf: OnceCell<String>,
}

impl HttpClient {
    /// Build the adapter from a configuration and a session store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying TLS/connection pool
    /// cannot be constructed.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network {
                reason: format!("failed to construct HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            config,
            store,
            csrf: OnceCell::new(),
        })
    }

    /// Issue a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// One of the [`ApiError`] kinds per the classification rules.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let req = self
            .http
            .get(self.config.api_url(path))
            .query(query);
        self.execute(Method::GET, path, req).await
    }

    /// Issue a mutating request with a JSON body.
    ///
    /// # Errors
    ///
    /// One of the [`ApiError`] kinds per the classification rules.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        let req = self
            .http
            .request(method.clone(), self.config.api_url(path))
            .json(body);
        self.execute(method, path, req).await
    }

    /// Issue a mutating request with no body (logout, delete,
    /// approve/reject).
    ///
    /// # Errors
    ///
    /// One of the [`ApiError`] kinds per the classification rules.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<Value> {
        let req = self.http.request(method.clone(), self.config.api_url(path));
        self.execute(method, path, req).await
    }

    /// Issue a mutating request with a multipart form body: text fields plus
    /// binary file parts (header images, package photos, ID card scans).
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when a file carries an unparsable MIME type;
    /// otherwise one of the [`ApiError`] kinds per the classification rules.
    pub async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        fields: Vec<(String, String)>,
        files: Vec<(String, FileUpload)>,
    ) -> Result<Value> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        for (name, file) in files {
            let part = Part::bytes(file.bytes).file_name(file.file_name);
            let part = part.mime_str(&file.mime).map_err(|e| {
                ApiError::Validation(ValidationErrors::from_message(format!(
                    "invalid MIME type {:?}: {e}",
                    file.mime
                )))
            })?;
            form = form.part(name, part);
        }
        let req = self
            .http
            .request(method.clone(), self.config.api_url(path))
            .multipart(form);
        self.execute(method, path, req).await
    }

    async fn execute(&self, method: Method, path: &str, mut req: RequestBuilder) -> Result<Value> {
        if let Some(session) = self.store.get() {
            req = req.bearer_auth(session.token);
        }
        if is_mutating(&method) {
            let token = self.ensure_csrf().await?;
            req = req.header(XSRF_HEADER, token);
        }
        req = req.header(ACCEPT, "application/json");

        tracing::debug!(%method, path, "sending request");
        let response = req.send().await.map_err(|e| transport_error(&method, path, e))?;
        Self::read_body(method, path, response).await
    }

    /// Fetch the CSRF cookie exactly once per client and cache the decoded
    /// token. Concurrent first mutations race into the same `OnceCell`, so
    /// the endpoint is still hit only once.
    async fn ensure_csrf(&self) -> Result<&str> {
        self.csrf
            .get_or_try_init(|| async {
                let url = self.config.csrf_url();
                tracing::debug!(url, "fetching CSRF cookie");
                let response = self
                    .http
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| transport_error(&Method::GET, &url, e))?;
                let status = response.status().as_u16();
                let token = response
                    .headers()
                    .get_all(SET_COOKIE)
                    .iter()
                    .filter_map(|v| v.to_str().ok())
                    .find_map(parse_xsrf_cookie);
                token.ok_or(ApiError::Server {
                    status,
                    message: "CSRF endpoint returned no XSRF-TOKEN cookie".to_owned(),
                })
            })
            .await
            .map(String::as_str)
    }

    async fn read_body(method: Method, path: &str, response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let error = Self::classify_error(status, response).await;
            tracing::warn!(%method, path, %status, %error, "request failed");
            return Err(error);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(&method, path, e))?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Server {
            status: status.as_u16(),
            message: format!("invalid JSON in response body: {e}"),
        })
    }

    async fn classify_error(status: StatusCode, response: Response) -> ApiError {
        let code = status.as_u16();
        match code {
            401 | 403 => ApiError::Auth { status: code },
            422 => {
                let body = response.json::<Value>().await.unwrap_or(Value::Null);
                ApiError::Validation(ValidationErrors::from_value(&body))
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                ApiError::Server {
                    status: code,
                    message,
                }
            }
        }
    }
}

/// POST/PUT/PATCH/DELETE change server state and need the CSRF token.
fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

fn transport_error(method: &Method, path: &str, error: reqwest::Error) -> ApiError {
    let reason = if error.is_timeout() {
        format!("{method} {path} timed out: {error}")
    } else {
        format!("{method} {path}: {error}")
    };
    ApiError::Network { reason }
}

/// Extract and percent-decode the token from a `Set-Cookie` header value.
fn parse_xsrf_cookie(header: &str) -> Option<String> {
    let rest = header.strip_prefix(XSRF_COOKIE)?.strip_prefix('=')?;
    let raw = rest.split(';').next().unwrap_or(rest);
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xsrf_cookie_is_decoded() {
        let header = "XSRF-TOKEN=abc%3D123; path=/; samesite=lax";
        assert_eq!(parse_xsrf_cookie(header), Some("abc=123".to_owned()));
    }

    #[test]
    fn unrelated_cookies_are_ignored() {
        assert_eq!(parse_xsrf_cookie("laravel_session=xyz; path=/"), None);
        assert_eq!(parse_xsrf_cookie("XSRF-TOKENISH=oops"), None);
    }

    #[test]
    fn mutating_methods_need_csrf() {
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::DELETE));
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::HEAD));
    }
}
