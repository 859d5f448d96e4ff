//! Published document fetcher.
//!
//! Features:
//! - Single GET per document, no retries
//! - Brotli, Gzip, Deflate compression (auto-negotiated)
//! - TLS via rustls
//! - Charset-aware body decoding

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::default_user_agent;
use crate::error::{GlyphError, Result};

/// Request timeout used when neither the config nor the CLI sets one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.5";

/// Host serving published Google Docs.
const DOCS_HOST: &str = "docs.google.com";

/// HTTP client for published documents
pub struct DocumentFetcher {
    client: Client,
    timeout: Duration,
}

impl DocumentFetcher {
    /// Create a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::with_options(Duration::from_secs(DEFAULT_TIMEOUT_SECS), &default_user_agent())
    }

    /// Create a fetcher with an explicit timeout and user agent
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self> {
        if timeout.is_zero() {
            return Err(GlyphError::InvalidTimeout(0));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|_| GlyphError::Config(format!("invalid user agent: {user_agent:?}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));

        let client = Client::builder()
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .default_headers(headers)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Fetch `url` and return the decoded body.
    ///
    /// Non-success statuses are errors.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        info!("Fetching document");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.log_failure(e))?
            .error_for_status()
            .map_err(|e| self.log_failure(e))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let body = response.text().await?;
        info!(
            content_type = %content_type,
            size = body.len(),
            "Fetch successful"
        );
        Ok(body)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn log_failure(&self, err: reqwest::Error) -> GlyphError {
        if err.is_timeout() {
            warn!(timeout_secs = self.timeout.as_secs(), "Request timed out");
        } else if err.is_connect() {
            warn!("Failed to connect");
        } else if let Some(status) = err.status() {
            warn!(%status, "HTTP error");
        } else {
            warn!(error = %err, "Request failed");
        }
        GlyphError::Http(err)
    }
}

/// Returns `true` if `url` looks like a published Google Docs document.
///
/// The host must be `docs.google.com` and the path must contain `/pub`.
pub fn validate_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        warn!("URL could not be parsed");
        return false;
    };

    if parsed.host_str() != Some(DOCS_HOST) {
        warn!("URL does not appear to be a Google Docs URL");
        return false;
    }

    if !parsed.path().contains("/pub") {
        warn!("URL does not appear to be a published Google Docs URL (missing /pub)");
        return false;
    }

    debug!("URL looks like a published document");
    true
}
