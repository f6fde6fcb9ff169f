// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP wrapper around the dashboard's REST backend.
//
// Every request goes to `<api_base_url><path>`, sends JSON, and carries the
// session cookie from a shared cookie jar. Non-2xx answers become
// `FimError::Api` with the backend's own `message` when it sent one.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use fimdash_core::DashboardConfig;
use fimdash_core::error::{FimError, Result};

/// Name of the cookie that marks a signed-in session.
pub const SESSION_COOKIE: &str = "token";

/// Thin async client bound to one backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    jar: Arc<Jar>,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;
        let mut raw = config.api_base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|e| FimError::InvalidUrl(format!("{raw}: {e}")))?;

        let jar = Arc::new(Jar::default());
        let timeout = config.request_timeout();
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .timeout(timeout)
            .build()
            .map_err(|e| FimError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base,
            jar,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve a backend path (`"logs/"`, `"trash/42/restore/"`) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| FimError::InvalidUrl(format!("{path}: {e}")))
    }

    // -- Session cookie ------------------------------------------------------

    /// Whether the jar currently holds a session cookie for the backend.
    pub fn has_session_cookie(&self) -> bool {
        self.jar
            .cookies(&self.base)
            .and_then(|header| header.to_str().ok().map(has_cookie))
            .unwrap_or(false)
    }

    /// Expire the session cookie locally (the backend clears it too on logout).
    pub fn forget_session(&self) {
        self.jar.add_cookie_str(
            &format!("{SESSION_COOKIE}=; Max-Age=0; Path=/"),
            &self.base,
        );
    }

    // -- Requests ------------------------------------------------------------

    /// `GET path?params` and decode the JSON answer.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        let body = self
            .execute(self.request(Method::GET, url).query(params), Method::GET, path)
            .await?;
        decode(&body)
    }

    /// Send a request with an optional JSON body; the answer body is ignored.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let url = self.endpoint(path)?;
        let mut request = self.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, method, path).await?;
        Ok(())
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<String> {
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if status.is_success() {
            debug!(%method, path, status = status.as_u16(), "backend request ok");
            return Ok(body);
        }

        let message = error_message(status, &body);
        warn!(%method, path, status = status.as_u16(), %message, "backend request failed");
        Err(FimError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> FimError {
        if e.is_timeout() {
            FimError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else if e.is_decode() {
            FimError::Decode(e.to_string())
        } else {
            FimError::Transport(e.to_string())
        }
    }
}

/// Decode a JSON body, treating an empty body as `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| FimError::Decode(e.to_string()))
}

/// The operator-facing message of a failed request: the backend's `message`
/// field, else the HTTP reason phrase, else `Error <status>`.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
        && !message.is_empty()
    {
        return message.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => format!("Error {}", status.as_u16()),
    }
}

fn has_cookie(header: &str) -> bool {
    header.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next() == Some(SESSION_COOKIE) && parts.next().is_some_and(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> ApiClient {
        let config = DashboardConfig {
            api_base_url: url.to_string(),
            ..Default::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn backend_message_is_verbatim() {
        let body = r#"{"message": "Log tidak ditemukan"}"#;
        assert_eq!(error_message(StatusCode::NOT_FOUND, body), "Log tidak ditemukan");
    }

    #[test]
    fn falls_back_to_reason_then_status() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>"),
            "Internal Server Error"
        );
        assert_eq!(error_message(StatusCode::BAD_REQUEST, r#"{"message": ""}"#), "Bad Request");
        let odd = StatusCode::from_u16(599).unwrap();
        assert_eq!(error_message(odd, ""), "Error 599");
    }

    #[test]
    fn endpoints_resolve_under_api_prefix() {
        let api = client("http://localhost:5000/api");
        assert_eq!(
            api.endpoint("/trash/42/restore/").unwrap().as_str(),
            "http://localhost:5000/api/trash/42/restore/"
        );
        assert_eq!(
            api.endpoint("logs/").unwrap().as_str(),
            "http://localhost:5000/api/logs/"
        );
    }

    #[test]
    fn rejects_non_http_base() {
        let config = DashboardConfig {
            api_base_url: "ftp://example.org/".into(),
            ..Default::default()
        };
        assert!(ApiClient::new(&config).is_err());
    }

    #[test]
    fn session_cookie_detection() {
        let api = client("http://localhost:5000/api/");
        assert!(!api.has_session_cookie());
        api.jar
            .add_cookie_str("token=abc123; Path=/", api.base_url());
        assert!(api.has_session_cookie());
        api.forget_session();
        assert!(!api.has_session_cookie());
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let value: Option<u32> = decode("  ").unwrap();
        assert_eq!(value, None);
        assert!(matches!(decode::<u32>("{"), Err(FimError::Decode(_))));
    }

    #[test]
    fn cookie_header_parsing() {
        assert!(has_cookie("csrftoken=x; token=abc"));
        assert!(!has_cookie("csrftoken=x"));
        assert!(!has_cookie("token="));
    }
}
