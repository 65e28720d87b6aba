use super::markers::{Field, MarkerScan};
use crate::profile::ExternalLink;

struct LinkSource {
    field: Field,
    platform: &'static str,
    /// Prepended to the matched handle; `None` means the match is already a URL.
    base_url: Option<&'static str>,
}

/// Output order is the order of this table.
const LINK_SOURCES: &[LinkSource] = &[
    LinkSource {
        field: Field::Instagram,
        platform: "Instagram",
        base_url: Some("https://instagram.com/"),
    },
    LinkSource {
        field: Field::YouTube,
        platform: "YouTube",
        base_url: Some("https://youtube.com/"),
    },
    LinkSource {
        field: Field::Twitter,
        platform: "Twitter",
        base_url: Some("https://twitter.com/"),
    },
    LinkSource {
        field: Field::BioLink,
        platform: "Website",
        base_url: None,
    },
];

/// External links found on the page, or `None` when there are none.
pub fn collect(scan: &MarkerScan) -> Option<Vec<ExternalLink>> {
    let links: Vec<ExternalLink> = LINK_SOURCES
        .iter()
        .filter_map(|src| {
            let value = scan.text(src.field)?;
            let url = match src.base_url {
                Some(base) => format!("{}{}", base, value),
                None => value.to_string(),
            };
            Some(ExternalLink {
                platform: src.platform.to_string(),
                url,
            })
        })
        .collect();

    if links.is_empty() {
        None
    } else {
        Some(links)
    }
}
