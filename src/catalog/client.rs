//! Authenticated HTTP access to the TMDB v3 API.
//!
//! Every request carries `Authorization: Bearer <token>`. A 401 triggers one
//! call to the provider's auth-check endpoint followed by exactly one retry
//! of the original request, so a logical call costs at most three physical
//! requests. Transport failures are returned as-is and never retried.

use std::fmt;
use std::time::Duration;

use movietracker_common::{Error, Result};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::AuthCheck;
use super::query::RequestSpec;
use crate::config::TmdbConfig;

const AUTH_CHECK_PATH: &str = "/authentication";

/// Stateless TMDB client: base URL, token and a pooled HTTP client.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_token: String,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    /// Returns `true` when a token has been configured.
    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue `request`, re-authenticating and retrying once on a 401.
    ///
    /// The retry happens even when re-authentication fails; that failure is
    /// only logged. Any non-2xx response left at the end becomes
    /// [`Error::UpstreamStatus`].
    pub async fn fetch(&self, method: Method, request: &RequestSpec) -> Result<Response> {
        let response = self.send_once(&method, request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return ensure_success(response);
        }

        warn!(path = %request.path, "TMDB returned 401, re-authenticating");
        if let Err(e) = self.authenticate().await {
            warn!(
                path = %request.path,
                error = %e,
                "TMDB re-authentication failed, retrying request anyway"
            );
        }

        let response = self.send_once(&method, request).await?;
        ensure_success(response)
    }

    /// `GET` `request` through [`fetch`](Self::fetch) and decode the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: &RequestSpec) -> Result<T> {
        let response = self.fetch(Method::GET, request).await?;
        decode(response).await
    }

    /// Probe the provider's auth-check endpoint.
    ///
    /// Any failure, including an unreachable provider, is reported as
    /// [`Error::Authentication`].
    pub async fn authenticate(&self) -> Result<()> {
        let response = self
            .send_once(&Method::GET, &RequestSpec::new(AUTH_CHECK_PATH))
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Authentication(format!(
                "auth check returned {status}"
            )));
        }

        let body: AuthCheck = decode(response)
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;
        if !body.success {
            return Err(Error::Authentication(
                "provider reported unsuccessful authentication".to_string(),
            ));
        }

        debug!("TMDB re-authentication succeeded");
        Ok(())
    }

    async fn send_once(&self, method: &Method, request: &RequestSpec) -> Result<Response> {
        let url = self.url(&request.path);
        debug!(method = %method, url = %url, "TMDB request");

        self.http
            .request(method.clone(), &url)
            .bearer_auth(&self.api_token)
            .query(&request.params)
            .send()
            .await
            .map_err(Error::transport)
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::UpstreamStatus {
            status: status.as_u16(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(Error::transport)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| Error::decode(format!("unexpected TMDB response body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, token: &str) -> TmdbConfig {
        TmdbConfig {
            base_url: base_url.to_string(),
            api_token: token.to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = TmdbClient::new(&config("https://api.themoviedb.org/3/", "t"));
        assert_eq!(
            client.url("/discover/movie"),
            "https://api.themoviedb.org/3/discover/movie"
        );
    }

    #[test]
    fn debug_hides_token() {
        let client = TmdbClient::new(&config("http://localhost", "super-secret"));
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn has_token() {
        assert!(TmdbClient::new(&config("http://localhost", "t")).has_token());
        assert!(!TmdbClient::new(&config("http://localhost", "")).has_token());
    }
}
