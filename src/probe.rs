use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Bound applied to every request the harness issues.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Options,
}

impl ProbeMethod {
    fn as_method(self) -> Method {
        match self {
            ProbeMethod::Get => Method::GET,
            ProbeMethod::Options => Method::OPTIONS,
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMethod::Get => write!(f, "GET"),
            ProbeMethod::Options => write!(f, "OPTIONS"),
        }
    }
}

/// A fully consumed response: status, headers and the whole body as text.
#[derive(Debug)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Build the client shared by every check in a run.
///
/// No credentials are ever attached and idle connections are not pooled, so a
/// connection lives only as long as the request that opened it.
pub fn build_client() -> Result<Client> {
    build_client_with_timeout(REQUEST_TIMEOUT)
}

/// Same as [`build_client`] with a caller-chosen bound on connect and total request time.
pub fn build_client_with_timeout(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .pool_max_idle_per_host(0)
        .user_agent(concat!("deploy-verify/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")
}

/// Issue a single request and read the response to completion.
///
/// Any transport failure (refused, DNS, TLS, timeout, truncated body) is an `Err`;
/// every status code is an `Ok`.
pub async fn probe(client: &Client, method: ProbeMethod, url: &str) -> Result<ProbeResponse> {
    debug!(%method, url, "dispatching probe");
    let start = Instant::now();
    let response = client
        .request(method.as_method(), url)
        .send()
        .await
        .with_context(|| format!("{method} {url}"))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .text()
        .await
        .with_context(|| format!("reading response body from {url}"))?;
    debug!(%method, url, status = status.as_u16(), elapsed = ?start.elapsed(), "probe complete");

    Ok(ProbeResponse {
        status,
        headers,
        body,
    })
}

/// Shorten a response body for inclusion in a one-line message.
pub fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
