pub mod decode;
pub mod links;
pub mod markers;

use tracing::debug;

use crate::error::ScrapeError;
use crate::profile::ProfileRecord;
use markers::{Field, MarkerScan};

const DEFAULT_NICKNAME: &str = "Unknown User";
const UNKNOWN_USERNAME: &str = "unknown";

/// Without at least one of these the page carries no usable profile data.
const REQUIRED_SIGNAL: [Field; 3] = [Field::Followers, Field::Likes, Field::Videos];

/// Recover a profile from raw page markup.
///
/// `input` is the caller's original identifier, used only as a username
/// fallback when the page names no handle.
pub fn extract_profile(html: &str, input: &str) -> Result<ProfileRecord, ScrapeError> {
    let scan = MarkerScan::scan(html);

    if !REQUIRED_SIGNAL.iter().any(|f| scan.found(*f)) {
        debug!("No follower/likes/videos markers in {} bytes", html.len());
        return Err(ScrapeError::ExtractionFailed);
    }

    Ok(ProfileRecord {
        username: resolve_username(&scan, input),
        nickname: scan
            .text(Field::Nickname)
            .unwrap_or(DEFAULT_NICKNAME)
            .to_string(),
        bio: scan.text(Field::Bio).map(str::to_string),
        avatar_url: scan.text(Field::Avatar).map(str::to_string),
        is_verified: scan.flag(Field::Verified).unwrap_or(false),
        followers: scan.count(Field::Followers).unwrap_or(0),
        following: scan.count(Field::Following).unwrap_or(0),
        likes: scan.count(Field::Likes).unwrap_or(0),
        videos: scan.count(Field::Videos).unwrap_or(0),
        external_links: links::collect(&scan),
    })
}

fn resolve_username(scan: &MarkerScan, input: &str) -> String {
    scan.text(Field::UniqueId)
        .or_else(|| scan.text(Field::HandleMention))
        .map(str::to_string)
        .or_else(|| username_from_input(input))
        .unwrap_or_else(|| UNKNOWN_USERNAME.to_string())
}

/// "@name" -> "name", "https://www.tiktok.com/@name?lang=en" -> "name"
fn username_from_input(input: &str) -> Option<String> {
    let path = input.trim().split(['?', '#']).next().unwrap_or_default();
    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let name = last.trim_start_matches('@');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

// ── Tests ──
