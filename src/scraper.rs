use tracing::warn;

use crate::error::ScrapeError;
use crate::fetcher::Fetcher;
use crate::parser;
use crate::profile::ProfileRecord;

/// Resolve, fetch and extract one profile.
///
/// Each call is independent; the only await point is the page fetch.
pub async fn scrape_profile(fetcher: &Fetcher, input: &str) -> Result<ProfileRecord, ScrapeError> {
    let url = fetcher.resolve(input)?;
    let html = fetcher.fetch_page(&url).await?;

    match parser::extract_profile(&html, input) {
        Ok(profile) => {
            profile.log_summary();
            Ok(profile)
        }
        Err(e) => {
            warn!("No profile data on {} ({} bytes)", url, html.len());
            Err(e)
        }
    }
}
