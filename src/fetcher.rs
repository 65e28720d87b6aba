use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::{debug, info, warn};

use crate::error::ScrapeError;
use crate::settings::Settings;

/// Identifiers containing this are treated as full profile URLs.
pub const SITE_DOMAIN: &str = "tiktok.com";
pub const DEFAULT_BASE_URL: &str = "https://www.tiktok.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123 Safari/537.36";

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.5";

/// Turn a handle (`@name`, `name`) or a full profile URL into the URL to fetch.
pub fn resolve_profile_url(base_url: &str, identifier: &str) -> String {
    if identifier.contains(SITE_DOMAIN) {
        return identifier.to_string();
    }
    let handle = identifier.strip_prefix('@').unwrap_or(identifier);
    format!("{}/@{}", base_url.trim_end_matches('/'), handle)
}

/// HTTP client with the browser-like header set the upstream expects.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent).context("Invalid user agent")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Fetcher {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Resolve an identifier against the configured base URL.
    ///
    /// Handles are trimmed; identifiers naming the site domain pass through as given.
    pub fn resolve(&self, identifier: &str) -> Result<String, ScrapeError> {
        if identifier.trim().is_empty() {
            return Err(ScrapeError::InvalidIdentifier);
        }
        let identifier = if identifier.contains(SITE_DOMAIN) {
            identifier
        } else {
            identifier.trim()
        };
        Ok(resolve_profile_url(&self.base_url, identifier))
    }

    /// GET the page and return its body, or the classified failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        info!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, url);
            return Err(ScrapeError::from_status(status));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
