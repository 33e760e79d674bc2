//! Field extraction from loosely structured SIP header values.
//!
//! These functions never fail: an empty string means the field is absent and
//! it is up to the caller to decide whether that matters. Patterns are
//! compiled once per process and shared by every call.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

// First run of non-whitespace; empty when the value starts with whitespace
static METHOD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S*").unwrap());
static USER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"sip:([^@]*)@").unwrap());
static IPV4_PORT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+:[0-9]+").unwrap());
static IPV4_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").unwrap());
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@([A-Za-z0-9_.-]*)").unwrap());

/// Returns the first whitespace-delimited token, e.g. the method of a request-line.
///
/// ```
/// assert_eq!(sipd_message::method_from("INVITE sip:1002@10.0.0.1 SIP/2.0"), "INVITE");
/// ```
pub fn method_from(value: &str) -> &str {
    METHOD_REGEX.find(value).map_or("", |m| m.as_str())
}

/// Returns the user part of the first `sip:user@...` URI in `value`.
///
/// ```
/// let from = r#""1001" <sip:1001@192.168.58.203>;tag=99f35805"#;
/// assert_eq!(sipd_message::user_from(from), "1001");
/// ```
pub fn user_from(value: &str) -> &str {
    user_range(value).map_or("", |range| &value[range])
}

/// Returns the host of a SIP URI found in `value`.
///
/// Candidates are tried from most to least specific so a bare address does
/// not cut the port off an `address:port` pair:
///
/// 1. IPv4 address with port
/// 2. bare IPv4 address
/// 3. the domain name following `@`
///
/// ```
/// use sipd_message::host_from;
///
/// assert_eq!(host_from("INVITE sip:1002@192.168.58.203:5060 SIP/2.0"), "192.168.58.203:5060");
/// assert_eq!(host_from("INVITE sip:1002@cgrates.org SIP/2.0"), "cgrates.org");
/// ```
pub fn host_from(value: &str) -> &str {
    host_range(value).map_or("", |range| &value[range])
}

/// Byte range of the user part, `None` when there is no user or it is empty.
fn user_range(value: &str) -> Option<Range<usize>> {
    USER_REGEX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.range())
        .filter(|range| !range.is_empty())
}

/// Byte range of the host, `None` when nothing matches or the match is empty.
fn host_range(value: &str) -> Option<Range<usize>> {
    IPV4_PORT_REGEX
        .find(value)
        .or_else(|| IPV4_REGEX.find(value))
        .map(|m| m.range())
        .or_else(|| {
            DOMAIN_REGEX
                .captures(value)
                .and_then(|caps| caps.get(1))
                .map(|m| m.range())
        })
        .filter(|range| !range.is_empty())
}

fn splice(value: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(value.len() - range.len() + replacement.len());
    out.push_str(&value[..range.start]);
    out.push_str(replacement);
    out.push_str(&value[range.end..]);
    out
}

/// Rewrites the user part found by [`user_from`], `None` if there is none.
pub(crate) fn replace_user(value: &str, user: &str) -> Option<String> {
    user_range(value).map(|range| splice(value, range, user))
}

/// Rewrites the host found by [`host_from`], `None` if there is none.
pub(crate) fn replace_host(value: &str, host: &str) -> Option<String> {
    host_range(value).map(|range| splice(value, range, host))
}
