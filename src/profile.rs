use serde::Serialize;
use tracing::info;

/// Normalized profile data recovered from a profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub username: String,
    pub nickname: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub followers: u64,
    pub following: u64,
    pub likes: u64,
    pub videos: u64,
    /// Never `Some(vec![])`.
    pub external_links: Option<Vec<ExternalLink>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub platform: String,
    pub url: String,
}

impl ProfileRecord {
    pub fn log_summary(&self) {
        info!("Scraped @{}", self.username);
        info!("   {} followers", group_thousands(self.followers));
        info!("   {} videos", group_thousands(self.videos));
        info!("   {} likes", group_thousands(self.likes));
        info!("   Verified: {}", if self.is_verified { "Yes" } else { "No" });
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
