//! The SIP message model.
//!
//! A [`Message`] is an open record: a mapping from header name (exactly as it
//! appears on the wire) to header value. Two pseudo-keys share the mapping
//! with the real headers:
//!
//! - [`REQUEST_KEY`] holds the request-line or status-line verbatim.
//! - [`CONTENT_KEY`] holds the body verbatim, every line CRLF-terminated.
//!
//! Unknown headers survive parse, mutation and serialization untouched since
//! nothing in the model depends on a fixed set of header names.
//!
//! # Examples
//!
//! ```
//! use sipd_message::Message;
//!
//! let msg: Message = "OPTIONS sip:bob@example.com SIP/2.0\r\nCSeq: 1 OPTIONS\r\n"
//!     .parse()
//!     .unwrap();
//! assert_eq!(msg.method_from("Request"), "OPTIONS");
//! assert_eq!(msg.header("CSeq"), Some("1 OPTIONS"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract;
use crate::parser::parse_message;

/// Line terminator used on the wire
pub const CRLF: &str = "\r\n";
/// Delimiter between a header name and its value
pub const HEADER_SEPARATOR: &str = ": ";
/// Pseudo-key holding the request-line or status-line
pub const REQUEST_KEY: &str = "Request";
/// Pseudo-key holding the message body
pub const CONTENT_KEY: &str = "Content";
/// The one header that is unfolded back into separate lines on serialization
pub const VIA_HEADER: &str = "Via";
/// Joins the values of a header that occurs more than once
pub const FOLD_DELIMITER: &str = ",";

/// A SIP message stored as a header-name to header-value mapping.
///
/// `Message` dereferences to the underlying [`HashMap`], so headers can be
/// inserted, removed and iterated directly. Cloning produces a fully
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(HashMap<String, String>);

impl Message {
    /// Creates an empty message, for building one by hand
    pub fn new() -> Self {
        Message(HashMap::new())
    }

    /// Parses raw CRLF-delimited wire text into a message.
    ///
    /// See [`parse_message`] for the exact rules.
    pub fn parse(s: &str) -> Result<Self> {
        parse_message(s)
    }

    /// Consumes the message, returning the underlying map
    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }

    /// Returns the value stored under `name`, if any
    pub fn header(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The request-line or status-line, `""` when absent
    pub fn request_line(&self) -> &str {
        self.header(REQUEST_KEY).unwrap_or_default()
    }

    /// The message body, `""` when absent
    pub fn content(&self) -> &str {
        self.header(CONTENT_KEY).unwrap_or_default()
    }

    /// Adds a header value, folding it into an existing non-empty value with
    /// [`FOLD_DELIMITER`].
    pub(crate) fn fold_header(&mut self, name: &str, value: &str) {
        match self.0.get_mut(name) {
            Some(existing) if !existing.is_empty() => {
                existing.push_str(FOLD_DELIMITER);
                existing.push_str(value);
            }
            _ => {
                self.0.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// First whitespace-delimited token of the value under `key`
    pub fn method_from(&self, key: &str) -> &str {
        extract::method_from(self.header(key).unwrap_or_default())
    }

    /// User part of the first SIP URI in the value under `key`
    pub fn user_from(&self, key: &str) -> &str {
        extract::user_from(self.header(key).unwrap_or_default())
    }

    /// Host (with port when present) of the value under `key`
    pub fn host_from(&self, key: &str) -> &str {
        extract::host_from(self.header(key).unwrap_or_default())
    }

    /// Replaces the user part of the SIP URI in the value under `key`.
    ///
    /// Does nothing when the value carries no user part.
    pub fn set_user(&mut self, key: &str, user: &str) {
        if let Some(value) = self.0.get_mut(key) {
            if let Some(rewritten) = extract::replace_user(value, user) {
                *value = rewritten;
            }
        }
    }

    /// Replaces the host (and port, if the host had one) in the value under `key`.
    ///
    /// Does nothing when no host can be found.
    pub fn set_host(&mut self, key: &str, host: &str) {
        if let Some(value) = self.0.get_mut(key) {
            if let Some(rewritten) = extract::replace_host(value, host) {
                *value = rewritten;
            }
        }
    }
}

impl Deref for Message {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Message {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<HashMap<String, String>> for Message {
    fn from(map: HashMap<String, String>) -> Self {
        Message(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Message
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Message(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl FromStr for Message {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_message(s)
    }
}

/// Serializes the message back to wire text.
///
/// Header order follows the map's iteration order and is not stable. `Via`
/// is the only header split back into one line per folded value; every other
/// repeated header is written as a single comma-joined line. That asymmetry
/// is intentional and mirrors what peers have always received from this model.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.request_line(), CRLF)?;
        for (name, value) in &self.0 {
            match name.as_str() {
                REQUEST_KEY | CONTENT_KEY => {}
                VIA_HEADER => {
                    for via in value.split(FOLD_DELIMITER) {
                        write!(f, "{}{}{}{}", name, HEADER_SEPARATOR, via, CRLF)?;
                    }
                }
                _ => write!(f, "{}{}{}{}", name, HEADER_SEPARATOR, value, CRLF)?,
            }
        }
        write!(f, "{}{}", CRLF, self.content())
    }
}
