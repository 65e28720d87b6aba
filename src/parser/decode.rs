use std::sync::LazyLock;

use regex::Regex;

static UNICODE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\\u[0-9a-f]{4}").unwrap());

/// Escaped slash as it appears inside embedded JSON strings.
const ESCAPED_SLASH: &str = "\\u002F";

/// Decode a raw `signature` value: `\n` becomes a newline, `\uXXXX`
/// escapes are dropped (emoji and other non-ASCII are lost).
pub fn bio(raw: &str) -> String {
    let with_newlines = raw.replace(r"\n", "\n");
    UNICODE_ESCAPE.replace_all(&with_newlines, "").into_owned()
}

pub fn avatar_url(raw: &str) -> String {
    raw.replace(ESCAPED_SLASH, "/")
}
