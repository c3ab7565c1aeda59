use thiserror::Error;

/// Caller input problems detected by the model.
///
/// Negative watts or hours are deliberately not rejected here: they propagate into
/// non-physical results, and it is up to the caller to warn about them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown device class `{0}` (expected one of: server, laptop, desktop)")]
    UnknownDeviceClass(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
