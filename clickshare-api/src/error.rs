use thiserror::Error;

/// Errors produced by the ClickShare REST client
///
/// Every request either succeeds or fails with exactly one of these variants.
/// From a caller's point of view they are all "this request failed"; the split
/// exists so the failure message can say whether the device was unreachable,
/// rejected the request, or answered with something unparseable.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    ///
    /// Connection refused, TLS handshake failure, timeout — anything that
    /// prevented an HTTP response from arriving at all.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx HTTP response from the device
    #[error("HTTP error response: {status} {message}")]
    Http { status: u16, message: String },

    /// Response arrived but the body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
