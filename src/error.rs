use core::fmt::Debug;

/// Errors surfaced across the crate's public entry points.
///
/// `InvalidArgument` aborts a whole batch call before any decoding starts.
/// `Cancelled` is returned when `MatchContext::cancel` was observed after a
/// call's work finished draining; partial results are discarded rather than
/// returned. `Encoding` and `OutOfRange` exist for parity with the
/// host-binding boundary this crate doesn't itself own — every `&str`
/// reaching this crate is already valid UTF-8, and Soundex degrades
/// non-ASCII input to a `tracing::warn!` rather than an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StringDistError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("operation cancelled")]
    Cancelled,
}

pub type Result<T> = core::result::Result<T, StringDistError>;
