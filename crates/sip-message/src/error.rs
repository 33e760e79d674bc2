use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a [`Message`](crate::Message) from wire text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A header line without the `": "` separator. Carries the raw line.
    #[error("unexpected line: {0:?}")]
    MalformedHeaderLine(String),
}

impl Error {
    /// The raw line that caused the failure
    pub fn line(&self) -> &str {
        match self {
            Error::MalformedHeaderLine(line) => line,
        }
    }
}
