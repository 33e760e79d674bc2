//! Line-based parser turning raw SIP text into a [`Message`].

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::message::{Message, CONTENT_KEY, CRLF, HEADER_SEPARATOR, REQUEST_KEY};

/// Parses a complete SIP message.
///
/// The input is split on CRLF. The first line is stored verbatim under
/// [`REQUEST_KEY`] without any validation. Following lines are
/// `Name: value` headers up to the first empty line; everything after that
/// line is the body, stored under [`CONTENT_KEY`] with a CRLF after each line.
/// A header seen more than once is folded into one comma-joined value.
///
/// Parsing is all-or-nothing: the first header line lacking `": "` yields
/// [`Error::MalformedHeaderLine`] and no message.
///
/// # Examples
///
/// ```
/// use sipd_message::parse_message;
///
/// let err = parse_message("INVITE sip:x SIP/2.0\r\nCall-ID\r\n").unwrap_err();
/// assert_eq!(err.to_string(), r#"unexpected line: "Call-ID""#);
/// ```
pub fn parse_message(input: &str) -> Result<Message> {
    let mut message = Message::new();
    let mut lines = input.split(CRLF);

    // `split` always yields at least one item, even for empty input
    let request_line = lines.next().unwrap_or_default();
    message.insert(REQUEST_KEY.to_string(), request_line.to_string());

    let mut lines = lines.peekable();
    let mut in_body = false;
    let mut body = String::new();

    while let Some(line) = lines.next() {
        if in_body {
            // The empty piece after a trailing CRLF terminates the last line
            if line.is_empty() && lines.peek().is_none() {
                break;
            }
            body.push_str(line);
            body.push_str(CRLF);
            continue;
        }

        if line.is_empty() {
            debug!(request = request_line, "Header section complete, reading body");
            in_body = true;
            continue;
        }

        let Some((name, value)) = line.split_once(HEADER_SEPARATOR) else {
            debug!(line, "Rejecting message with malformed header line");
            return Err(Error::MalformedHeaderLine(line.to_string()));
        };

        if message.contains_key(name) {
            trace!(header = name, "Folding repeated header");
        }
        message.fold_header(name, value);
    }

    if !body.is_empty() {
        message.insert(CONTENT_KEY.to_string(), body);
    }

    Ok(message)
}
