use thiserror::Error;

/// Errors from building a page record
///
/// Both variants are terminal for the session: no queries may run against
/// a record that failed to build.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Request failure: connection error, timeout, or a non-success status
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// Any other processing fault while assembling the record
    #[error("an error occurred: {0}")]
    Unknown(String),
}

/// Errors from the completion service call
///
/// Recovered locally into a displayable string per query; never fatal for
/// the session.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("completion API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Well-formed response that carried no generated message
    #[error("completion response contained no choices")]
    NoChoices,
}
