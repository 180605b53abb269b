use thiserror::Error;

/// Everything that can go wrong while editing or spinning a wheel.
///
/// All of these are recoverable user-input problems; the caller surfaces the
/// message and lets the user correct their input and retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    #[error("entry id '{0}' is already on the wheel")]
    DuplicateId(String),

    #[error("entry id '{0}' was removed earlier and cannot be reused")]
    RetiredId(String),

    #[error("no entry with id '{0}'")]
    UnknownEntry(String),

    #[error("the wheel has no entries to spin")]
    EmptyWheel,

    #[error("total weight must be positive")]
    ZeroTotalWeight,

    #[error("a spin is already in flight")]
    SpinInFlight,
}
