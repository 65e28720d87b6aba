use reqwest::StatusCode;

/// Why a profile could not be scraped.
///
/// The kind survives fetch and extraction untouched; callers branch on it and
/// only the outer boundary turns it into text via [`ScrapeError::boundary_message`].
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("Empty profile identifier")]
    InvalidIdentifier,
    #[error("Account not found")]
    NotFound,
    #[error("Access denied (private/blocked)")]
    AccessDenied,
    #[error("Too many requests")]
    RateLimited,
    #[error("HTTP {}", .status.as_u16())]
    UpstreamError { status: StatusCode },
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Could not extract data (private/blocked account)")]
    ExtractionFailed,
}

impl ScrapeError {
    /// Map a non-success upstream status onto its failure kind.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => ScrapeError::NotFound,
            StatusCode::FORBIDDEN => ScrapeError::AccessDenied,
            StatusCode::TOO_MANY_REQUESTS => ScrapeError::RateLimited,
            status => ScrapeError::UpstreamError { status },
        }
    }

    /// Uniform text shown to clients: `Scraping failed: <reason>`.
    pub fn boundary_message(&self) -> String {
        format!("Scraping failed: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(
            ScrapeError::from_status(StatusCode::NOT_FOUND),
            ScrapeError::NotFound
        ));
        assert!(matches!(
            ScrapeError::from_status(StatusCode::FORBIDDEN),
            ScrapeError::AccessDenied
        ));
        assert!(matches!(
            ScrapeError::from_status(StatusCode::TOO_MANY_REQUESTS),
            ScrapeError::RateLimited
        ));
        assert!(matches!(
            ScrapeError::from_status(StatusCode::BAD_GATEWAY),
            ScrapeError::UpstreamError { status } if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn boundary_message_prefix() {
        assert_eq!(
            ScrapeError::NotFound.boundary_message(),
            "Scraping failed: Account not found"
        );
        assert_eq!(
            ScrapeError::from_status(StatusCode::INTERNAL_SERVER_ERROR).boundary_message(),
            "Scraping failed: HTTP 500"
        );
        assert_eq!(
            ScrapeError::ExtractionFailed.boundary_message(),
            "Scraping failed: Could not extract data (private/blocked account)"
        );
    }
}
