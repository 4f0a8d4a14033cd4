//! HTTP client for the certification recommendation service.
//!
//! # Contract
//!
//! One `POST` per [`RecommendationClient::submit`] call, JSON in and JSON out.
//! There is no retry and no whole-request timeout; only the connect phase is
//! bounded. The response body is decoded permissively (see
//! [`RecommendationResponse`]); only a body that is not JSON at all is an error.
//!
//! # Error Handling
//!
//! Every failure mode is folded into [`ClientError`]. Callers that only need a
//! success/failure split can treat any `Err` as a transport failure.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use thiserror::Error;
use url::Url;

pub use advisor_types::{RecommendationRequest, RecommendationResponse};

/// Production recommendation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://agreenably-server.onrender.com/submitForm";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

// The service is a single host hit once per submit; a small idle pool is plenty.
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 2;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;
const MAX_REDIRECTS: usize = 5;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;
const MAX_RESPONSE_BODY_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid endpoint URL {raw:?}: {source}")]
    Invalid {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("endpoint scheme must be http or https (got {0})")]
    UnsupportedScheme(String),
    #[error("plain http endpoint {0} requires allow_http = true")]
    InsecureScheme(String),
}

/// A validated recommendation endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parse and validate an endpoint. Plain `http` is only accepted when
    /// `allow_http` is set (local development and tests).
    pub fn parse(raw: &str, allow_http: bool) -> Result<Self, EndpointError> {
        let url = Url::parse(raw.trim()).map_err(|source| EndpointError::Invalid {
            raw: raw.to_string(),
            source,
        })?;
        match url.scheme() {
            "https" => Ok(Self(url)),
            "http" if allow_http => Ok(Self(url)),
            "http" => Err(EndpointError::InsecureScheme(url.to_string())),
            other => Err(EndpointError::UnsupportedScheme(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    #[must_use]
    pub fn is_https(&self) -> bool {
        self.0.scheme() == "https"
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT must be a valid URL"))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Transport settings for [`RecommendationClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Endpoint,
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service error {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status for non-2xx responses.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn base_client_builder(settings: &ClientSettings) -> reqwest::ClientBuilder {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .https_only(settings.endpoint.is_https())
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .default_headers(default_headers)
}

/// Client for the recommendation endpoint. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl RecommendationClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let http = base_client_builder(settings)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send one recommendation request and decode the reply.
    pub async fn submit(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ClientError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            industries = request.industries.len(),
            "Sending recommendation request"
        );

        let response = self
            .http
            .post(self.endpoint.as_url().clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            tracing::warn!(%status, "Recommendation service returned an error status");
            return Err(ClientError::Status { status, body });
        }

        let body = read_capped_body(response, MAX_RESPONSE_BODY_BYTES).await?;
        let decoded: RecommendationResponse = serde_json::from_slice(&body)?;
        tracing::debug!(
            %status,
            certificates = decoded.certificates.len(),
            "Recommendation response decoded"
        );
        Ok(decoded)
    }
}

async fn read_capped_body(mut response: Response, limit: usize) -> Result<Vec<u8>, ClientError> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        body.extend_from_slice(&chunk);
        if body.len() > limit {
            return Err(ClientError::TooLarge { limit });
        }
    }
    Ok(body)
}

/// Read at most [`MAX_ERROR_BODY_BYTES`] of an error body for diagnostics.
pub async fn read_capped_error_body(mut response: Response) -> String {
    let mut body = Vec::new();
    while let Ok(Some(chunk)) = response.chunk().await {
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}
