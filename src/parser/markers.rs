//! Catalog of the inline key/value markers the profile page embeds in its
//! application-state blobs.
//!
//! Every field is one `(pattern, decoder)` entry in [`MARKERS`]. When the
//! upstream renames or reshapes a key, only that entry changes.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::decode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Followers,
    Following,
    Likes,
    Videos,
    Nickname,
    UniqueId,
    /// Any `@handle` in the page; last-resort username source.
    HandleMention,
    Bio,
    Avatar,
    Verified,
    Instagram,
    YouTube,
    Twitter,
    BioLink,
}

#[derive(Debug, Clone, Copy)]
pub enum Decoder {
    Count,
    Text,
    Bio,
    Avatar,
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Count(u64),
    Text(String),
    Flag(bool),
}

impl Decoder {
    fn decode(self, raw: &str) -> Value {
        match self {
            // Capture is all digits, so only overflow can fail.
            Decoder::Count => Value::Count(raw.parse().unwrap_or(u64::MAX)),
            Decoder::Text => Value::Text(raw.to_string()),
            Decoder::Bio => Value::Text(decode::bio(raw)),
            Decoder::Avatar => Value::Text(decode::avatar_url(raw)),
            Decoder::Flag => Value::Flag(raw == "true"),
        }
    }
}

struct Marker {
    field: Field,
    pattern: &'static str,
    decoder: Decoder,
}

const MARKERS: &[Marker] = &[
    Marker {
        field: Field::Followers,
        pattern: r#""followerCount":(\d+)"#,
        decoder: Decoder::Count,
    },
    Marker {
        field: Field::Following,
        pattern: r#""followingCount":(\d+)"#,
        decoder: Decoder::Count,
    },
    Marker {
        field: Field::Likes,
        pattern: r#""heartCount":(\d+)"#,
        decoder: Decoder::Count,
    },
    Marker {
        field: Field::Videos,
        pattern: r#""videoCount":(\d+)"#,
        decoder: Decoder::Count,
    },
    Marker {
        field: Field::Nickname,
        pattern: r#""nickname":"([^"]+)""#,
        decoder: Decoder::Text,
    },
    Marker {
        field: Field::UniqueId,
        pattern: r#""uniqueId":"([^"]+)""#,
        decoder: Decoder::Text,
    },
    Marker {
        field: Field::HandleMention,
        pattern: r"@([a-zA-Z0-9_.]+)",
        decoder: Decoder::Text,
    },
    Marker {
        field: Field::Bio,
        pattern: r#""signature":"([^"]+)""#,
        decoder: Decoder::Bio,
    },
    Marker {
        field: Field::Avatar,
        pattern: r#""avatarLarger":"([^"]+)""#,
        decoder: Decoder::Avatar,
    },
    Marker {
        field: Field::Verified,
        pattern: r#""verified":(true|false)"#,
        decoder: Decoder::Flag,
    },
    Marker {
        field: Field::Instagram,
        pattern: r#""instagram":"([^"]+)""#,
        decoder: Decoder::Text,
    },
    Marker {
        field: Field::YouTube,
        pattern: r#""youtube":"([^"]+)""#,
        decoder: Decoder::Text,
    },
    Marker {
        field: Field::Twitter,
        pattern: r#""twitter":"([^"]+)""#,
        decoder: Decoder::Text,
    },
    Marker {
        field: Field::BioLink,
        pattern: r#""bioLink":\{"link":"([^"]+)""#,
        decoder: Decoder::Text,
    },
];

static COMPILED: LazyLock<Vec<(&'static Marker, Regex)>> = LazyLock::new(|| {
    MARKERS
        .iter()
        .map(|m| (m, Regex::new(m.pattern).unwrap()))
        .collect()
});

/// Decoded hits of one page against the whole catalog.
#[derive(Debug, Default)]
pub struct MarkerScan {
    values: HashMap<Field, Value>,
}

impl MarkerScan {
    /// Evaluate every marker independently; the first occurrence in document
    /// order wins.
    pub fn scan(html: &str) -> Self {
        let mut values = HashMap::new();
        for (marker, re) in COMPILED.iter() {
            let Some(raw) = re.captures(html).and_then(|c| c.get(1)) else {
                continue;
            };
            debug!("marker {:?} matched at byte {}", marker.field, raw.start());
            values.insert(marker.field, marker.decoder.decode(raw.as_str()));
        }
        MarkerScan { values }
    }

    pub fn found(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn count(&self, field: Field) -> Option<u64> {
        match self.values.get(&field) {
            Some(Value::Count(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match self.values.get(&field) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match self.values.get(&field) {
            Some(Value::Flag(b)) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles_once() {
        assert_eq!(COMPILED.len(), MARKERS.len());
        for (marker, re) in COMPILED.iter() {
            assert_eq!(re.captures_len(), 2, "{:?} needs exactly one group", marker.field);
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let html = r#"{"followerCount":10}...{"followerCount":99}"#;
        assert_eq!(MarkerScan::scan(html).count(Field::Followers), Some(10));
    }

    #[test]
    fn numeric_markers() {
        let html = r#""followerCount":1,"followingCount":2,"heartCount":3,"videoCount":4"#;
        let scan = MarkerScan::scan(html);
        assert_eq!(scan.count(Field::Followers), Some(1));
        assert_eq!(scan.count(Field::Following), Some(2));
        assert_eq!(scan.count(Field::Likes), Some(3));
        assert_eq!(scan.count(Field::Videos), Some(4));
    }

    #[test]
    fn oversized_count_saturates() {
        let scan = MarkerScan::scan(r#""heartCount":99999999999999999999999"#);
        assert!(scan.found(Field::Likes));
        assert_eq!(scan.count(Field::Likes), Some(u64::MAX));
    }

    #[test]
    fn negative_count_is_not_a_match() {
        let scan = MarkerScan::scan(r#""followerCount":-5"#);
        assert!(!scan.found(Field::Followers));
    }

    #[test]
    fn empty_string_value_is_not_a_match() {
        let scan = MarkerScan::scan(r#""nickname":"","instagram":"""#);
        assert!(!scan.found(Field::Nickname));
        assert!(!scan.found(Field::Instagram));
    }

    #[test]
    fn verified_flag() {
        assert_eq!(MarkerScan::scan(r#""verified":true"#).flag(Field::Verified), Some(true));
        assert_eq!(MarkerScan::scan(r#""verified":false"#).flag(Field::Verified), Some(false));
        assert_eq!(MarkerScan::scan(r#""verified":null"#).flag(Field::Verified), None);
    }

    #[test]
    fn nested_bio_link() {
        let scan = MarkerScan::scan(r#""bioLink":{"link":"https://linktr.ee/x","risk":0}"#);
        assert_eq!(scan.text(Field::BioLink), Some("https://linktr.ee/x"));
    }

    #[test]
    fn accessor_kind_mismatch_is_none() {
        let scan = MarkerScan::scan(r#""followerCount":7"#);
        assert_eq!(scan.text(Field::Followers), None);
        assert_eq!(scan.flag(Field::Followers), None);
    }
}
