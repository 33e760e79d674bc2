//! SIP message model for sipd
//!
//! This crate turns raw SIP text into an open header mapping, writes it back
//! to wire text, and answers the questions a signaling service asks of a
//! message: which method, which user, which host, and what Digest response
//! the credentials should carry.
//!
//! Transport, transactions and dialogs live elsewhere; callers hand this crate
//! text that has already been read off the socket.
//!
//! # Example
//!
//! ```
//! use sipd_message::prelude::*;
//!
//! let raw = "INVITE sip:1002@192.168.58.203 SIP/2.0\r\n\
//!            From: \"1001\" <sip:1001@192.168.58.203>;tag=99f35805\r\n\
//!            Via: SIP/2.0/UDP 192.168.58.201:5060\r\n\
//!            Content-Length: 0\r\n\
//!            \r\n";
//!
//! let msg = Message::parse(raw)?;
//! assert_eq!(msg.method_from("Request"), "INVITE");
//! assert_eq!(msg.user_from("From"), "1001");
//! assert_eq!(msg.host_from("Via"), "192.168.58.201:5060");
//!
//! let mut reply = msg.clone();
//! reply.prepare_reply();
//! reply.insert(REQUEST_KEY.to_string(), "SIP/2.0 100 Trying".to_string());
//! assert!(reply.to_string().starts_with("SIP/2.0 100 Trying\r\n"));
//! # Ok::<(), sipd_message::Error>(())
//! ```

pub mod auth;
pub mod error;
pub mod extract;
pub mod message;
pub mod parser;
pub mod reply;

pub use auth::{digest_response, value_from, AUTHORIZATION_HEADER};
pub use error::{Error, Result};
pub use extract::{host_from, method_from, user_from};
pub use message::{
    Message, CONTENT_KEY, CRLF, FOLD_DELIMITER, HEADER_SEPARATOR, REQUEST_KEY, VIA_HEADER,
};
pub use parser::parse_message;

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::auth::{value_from, AUTHORIZATION_HEADER};
    pub use crate::error::{Error, Result};
    pub use crate::extract::{host_from, method_from, user_from};
    pub use crate::message::{Message, CONTENT_KEY, REQUEST_KEY};
    pub use crate::parser::parse_message;
}
