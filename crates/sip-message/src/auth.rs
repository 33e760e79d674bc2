//! Digest authentication support (RFC 2617 style, without qop/cnonce).
//!
//! The credentials header is treated as a flat list of `key=value` or
//! `key="value"` parameters; quotes are dropped before lookup.
//!
//! ```text
//! HA1      = MD5(username:realm:secret)
//! HA2      = MD5(method:uri)
//! response = MD5(HA1:nonce:HA2)
//! ```

use regex::Regex;
use tracing::trace;

use crate::message::{Message, REQUEST_KEY};

/// Header carrying the credentials checked by [`Message::digest`]
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Returns the value of parameter `field` inside a credentials header value.
///
/// All double quotes are removed first, then the first `field=` occurrence is
/// read up to a space, comma, semicolon or `>`. Returns an empty string when
/// the parameter is absent.
///
/// ```
/// let auth = r#"Digest username="1001",realm="example.com",nonce="abc""#;
/// assert_eq!(sipd_message::value_from(auth, "realm"), "example.com");
/// assert_eq!(sipd_message::value_from(auth, "opaque"), "");
/// ```
pub fn value_from(header_value: &str, field: &str) -> String {
    let unquoted = header_value.replace('"', "");
    let prefix_len = field.len() + 1;
    // Field names come from callers, so the pattern can only be built here
    let pattern = format!("{}=[^ ,;>]*", regex::escape(field));
    match Regex::new(&pattern) {
        Ok(re) => re
            .find(&unquoted)
            .map(|m| m.as_str()[prefix_len..].to_string())
            .unwrap_or_default(),
        Err(err) => {
            trace!(field, error = %err, "Could not build parameter pattern");
            String::new()
        }
    }
}

fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Computes a Digest response from its raw inputs.
pub fn digest_response(
    username: &str,
    realm: &str,
    secret: &str,
    method: &str,
    uri: &str,
    nonce: &str,
) -> String {
    let ha1 = md5_hex(&format!("{}:{}:{}", username, realm, secret));
    let ha2 = md5_hex(&format!("{}:{}", method, uri));
    md5_hex(&format!("{}:{}:{}", ha1, nonce, ha2))
}

impl Message {
    /// Parameter `field` of the header stored under `key`
    pub fn value_from(&self, key: &str, field: &str) -> String {
        value_from(self.header(key).unwrap_or_default(), field)
    }

    /// Expected Digest response for the `Authorization` header of this message.
    ///
    /// Missing fields are hashed as empty strings, so the result is always a
    /// well-formed digest; callers that care must check the fields themselves.
    pub fn digest(&self, secret: &str) -> String {
        self.digest_for(AUTHORIZATION_HEADER, secret)
    }

    /// Same as [`Message::digest`], reading credentials from `header`
    /// (e.g. `Proxy-Authorization`).
    pub fn digest_for(&self, header: &str, secret: &str) -> String {
        let username = self.value_from(header, "username");
        let realm = self.value_from(header, "realm");
        let uri = self.value_from(header, "uri");
        let nonce = self.value_from(header, "nonce");
        let method = self.method_from(REQUEST_KEY);

        trace!(
            header,
            username = %username,
            realm = %realm,
            method,
            uri = %uri,
            nonce = %nonce,
            "Computing digest response"
        );

        digest_response(&username, &realm, secret, method, &uri, &nonce)
    }
}
