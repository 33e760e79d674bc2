//! Turning a received request into a reply skeleton.

use tracing::debug;

use crate::message::{Message, CONTENT_KEY};

/// Headers dropped from a request before it is reused as a reply
const STRIPPED_HEADERS: [&str; 4] = ["Allow", "Supported", CONTENT_KEY, "Content-Type"];

impl Message {
    /// Prepares the message in place to be sent back as a body-less reply.
    ///
    /// `Allow`, `Supported`, `Content-Type` and the body are removed and
    /// `Content-Length` is set to `0`. Every other header, the request-line
    /// included, is left for the caller to adjust. Clone first if the
    /// original request is still needed.
    pub fn prepare_reply(&mut self) {
        let removed: Vec<&str> = STRIPPED_HEADERS
            .iter()
            .copied()
            .filter(|name| self.remove(*name).is_some())
            .collect();
        debug!(?removed, "Prepared reply skeleton");

        self.insert("Content-Length".to_string(), "0".to_string());
    }
}
