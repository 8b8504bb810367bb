//! Fetch error taxonomy.
//!
//! Every gateway failure is one of three shapes. The `Display` output is
//! the user-facing error text: stores surface it through their channel's
//! `error` field and the presentation layer renders it next to a retry
//! affordance.

use thiserror::Error;

/// A failed event fetch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure: no connectivity, DNS, timeout, or an
    /// unreadable body. The description is surfaced verbatim.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx HTTP response.
    #[error("Error {code}: {message}")]
    Http {
        /// HTTP status code.
        code: u16,
        /// Status reason phrase.
        message: String,
    },

    /// Structurally successful response with the expected payload missing.
    /// Treated as a failure, never as a valid-empty state.
    #[error("empty response body")]
    EmptyResult,
}

/// A specialized `Result` for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_format() {
        let err = FetchError::Http {
            code: 500,
            message: "Server Error".into(),
        };
        assert_eq!(err.to_string(), "Error 500: Server Error");
    }

    #[test]
    fn transport_error_displays_verbatim() {
        let err = FetchError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }
}
