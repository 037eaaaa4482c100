use thiserror::Error;

/// A call to the text or image model failed or came back empty.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned HTTP {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("{operation} returned an unreadable body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned no {what}")]
    Empty {
        operation: &'static str,
        what: &'static str,
    },
}

/// The choices text did not follow the `N. text` line format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceFormatError {
    #[error("choice line {line_number} has no \". \" separator: {line:?}")]
    MissingSeparator { line_number: usize, line: String },

    #[error("choice line {line_number} does not start with a numeric ordinal: {line:?}")]
    BadOrdinal { line_number: usize, line: String },

    #[error("expected {expected} choices, got {found}")]
    WrongCount { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum StoryError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    ChoiceFormat(#[from] ChoiceFormatError),
}
