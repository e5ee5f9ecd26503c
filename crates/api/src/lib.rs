//! GitHub API client utilities.
//!
//! This module provides a lightweight client for reading public repository
//! metadata from the GitHub REST API. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Validating `FOLIO_GITHUB_API_BASE` for safety
//! - Building requests with a consistent User-Agent and Accept headers
//! - Classifying failures into a typed [`FetchError`]
//!
//! The primary entry point is [`GitHubClient`]. Create an instance via
//! [`GitHubClient::new_from_env`] and then call
//! [`GitHubClient::fetch_repository`].
//!
//! # Example
//!
//! ```ignore
//! use folio_api::GitHubClient;
//!
//! async fn stars() -> anyhow::Result<u64> {
//!     let client = GitHubClient::new_from_env()?;
//!     let repo = client.fetch_repository("levalleyjack", "slugtistics").await?;
//!     Ok(repo.stargazers_count)
//! }
//! ```

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use folio_types::RepoMetadata;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, RequestBuilder, Url, header};
pub use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "FOLIO_GITHUB_API_BASE";
/// Public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Allowed hostnames or base domains for non-local configurations of
/// `FOLIO_GITHUB_API_BASE`. Subdomains of these domains are also allowed.
const ALLOWED_GITHUB_DOMAINS: &[&str] = &["github.com", "githubusercontent.com"];
/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Characters escaped inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Failure to fetch repository metadata.
///
/// Callers that only need a displayable value treat every variant the same
/// way; the split exists so logs can tell a network problem from an API
/// refusal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("request for {repo} failed: {source}")]
    Transport {
        repo: String,
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with a non-success status.
    #[error("request for {repo} returned {status}")]
    Status { repo: String, status: StatusCode },
    /// The response body was not the expected repository document.
    #[error("response for {repo} could not be decoded: {source}")]
    Decode {
        repo: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Whether the failure happened before any HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for GitHub API access.
///
/// The client pre-configures default headers and builds requests against a
/// validated base URL. No authentication is sent; only public endpoints are
/// used.
pub struct GitHubClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl GitHubClient {
    /// Construct a [`GitHubClient`] from the environment.
    ///
    /// The base URL is taken from `FOLIO_GITHUB_API_BASE` (if set) or falls
    /// back to the public API.
    pub fn new_from_env() -> Result<Self> {
        let base_url = env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.into());
        Self::with_base_url(base_url)
    }

    /// Construct a client against an explicit base URL.
    ///
    /// Non-localhost hosts must use HTTPS and be within an allowed GitHub
    /// domain.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static(GITHUB_ACCEPT));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("folio/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    /// Build a `reqwest::RequestBuilder` for a method and API-relative path.
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "building request");

        self.http
            .request(method, url)
            .header(header::USER_AGENT, &self.user_agent)
    }

    /// `GET /repos/{owner}/{name}` decoded into [`RepoMetadata`].
    pub async fn fetch_repository(&self, owner: &str, name: &str) -> Result<RepoMetadata, FetchError> {
        let repo = format!("{owner}/{name}");
        let response = self
            .request(reqwest::Method::GET, &repository_path(owner, name))
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                repo: repo.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { repo, status });
        }

        response
            .json::<RepoMetadata>()
            .await
            .map_err(|source| FetchError::Decode { repo, source })
    }
}

/// API path of a repository with both segments escaped.
pub fn repository_path(owner: &str, name: &str) -> String {
    format!(
        "/repos/{}/{}",
        utf8_percent_encode(owner, PATH_SEGMENT),
        utf8_percent_encode(name, PATH_SEGMENT)
    )
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS, and host must be one of the allowed
///   GitHub domains or a subdomain thereof
pub fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base).map_err(|e| anyhow!("Invalid {} URL '{}': {}", API_BASE_ENV, base, e))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("{} must include a host", API_BASE_ENV))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(anyhow!(
            "{} must use https for non-localhost hosts; got '{}://'",
            API_BASE_ENV,
            parsed_base_url.scheme()
        ));
    }

    let is_allowed_domain = ALLOWED_GITHUB_DOMAINS.iter().any(|&allowed_domain| {
        host_name.eq_ignore_ascii_case(allowed_domain) || host_name.ends_with(&format!(".{}", allowed_domain))
    });
    if !is_allowed_domain {
        return Err(anyhow!(
            "{} host '{}' is not allowed; must be one of {:?} or a subdomain, or localhost",
            API_BASE_ENV,
            host_name,
            ALLOWED_GITHUB_DOMAINS
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_public_api_and_localhost() {
        assert!(validate_base_url("https://api.github.com").is_ok());
        assert!(validate_base_url("https://github.example.github.com").is_ok());
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert!(validate_base_url("http://127.0.0.1:9000").is_ok());
    }

    #[test]
    fn rejects_plain_http_and_foreign_hosts() {
        let err = validate_base_url("http://api.github.com").unwrap_err();
        assert!(err.to_string().contains("https"), "{err}");
        let err = validate_base_url("https://api.evil-github.net").unwrap_err();
        assert!(err.to_string().contains("not allowed"), "{err}");
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn repository_path_escapes_segments() {
        assert_eq!(repository_path("levalleyjack", "slugtistics"), "/repos/levalleyjack/slugtistics");
        assert_eq!(repository_path("a b", "c/d"), "/repos/a%20b/c%2Fd");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = GitHubClient::with_base_url("http://localhost:1234/").expect("client");
        assert_eq!(client.base_url, "http://localhost:1234");
        assert!(client.user_agent.starts_with("folio/"));
    }
}
