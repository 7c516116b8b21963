use std::fmt;

/// Result alias for timing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Both kinds are precondition violations raised at the offending call site;
/// neither is transient.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// An object was used outside its lifecycle (expired duration, second clock).
    LifecycleViolation,
    /// A value handed to a constructor or setter is out of range.
    InvalidConfiguration,
}

/// Errors raised by the clock, the registry and durations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A clock is already alive on this scheduler thread.
    ClockAlreadyExists,
    /// The duration was already deactivated (expired or cancelled).
    DurationInactive,
    /// Duration spans must be finite and strictly positive.
    InvalidSpan(f64),
    /// Frame rates must be finite and strictly positive.
    InvalidRate(f64),
    /// An environment variable held a value that could not be parsed.
    InvalidEnv { var: &'static str, value: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ClockAlreadyExists | Error::DurationInactive => ErrorKind::LifecycleViolation,
            Error::InvalidSpan(_) | Error::InvalidRate(_) | Error::InvalidEnv { .. } => {
                ErrorKind::InvalidConfiguration
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ClockAlreadyExists => {
                write!(f, "lifecycle violation: a clock already exists on this thread")
            }
            Error::DurationInactive => {
                write!(f, "lifecycle violation: duration is no longer active")
            }
            Error::InvalidSpan(span) => {
                write!(f, "invalid configuration: duration span must be > 0, got {span}")
            }
            Error::InvalidRate(rate) => {
                write!(f, "invalid configuration: frame rate must be > 0, got {rate}")
            }
            Error::InvalidEnv { var, value } => {
                write!(f, "invalid configuration: cannot parse {var}={value:?}")
            }
        }
    }
}

impl std::error::Error for Error {}
