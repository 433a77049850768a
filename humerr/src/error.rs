use crate::errno::Errno;
use crate::error_code::ErrorCode;
use alloc::boxed::Box;
use core::error::Error as StdError;
use core::fmt::{Debug, Display, Formatter};

/// The message shown in place of an unknown cause.
pub const UNKNOWN_CAUSE: &str = "🤷";

/// The boxed form of an underlying cause.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Represents the ultimate type of error: an error code, and the underlying error that triggered
/// it, if any.
///
/// Two errors are considered the same kind of error when their codes are equal, regardless of
/// their causes. See [`Error::matches`].
pub struct Error<C: ErrorCode = Errno> {
    code: C,
    cause: Option<Cause>,
}
impl<C: ErrorCode> Error<C> {
    /// Creates a new error with an unknown cause.
    pub fn new(code: C) -> Self {
        Error { code, cause: None }
    }

    /// Creates a new error caused by another error.
    ///
    /// Anything convertible into a boxed error works here, including string messages.
    pub fn with_cause(code: C, cause: impl Into<Cause>) -> Self {
        Error { code, cause: Some(cause.into()) }
    }

    /// Returns the error code of this error.
    pub fn code(&self) -> C {
        self.code
    }

    /// Returns whether this error has a given error code.
    pub fn is_code(&self, code: C) -> bool {
        self.code == code
    }

    /// Returns the underlying cause of this error, exactly as it was given.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes this error, returning the underlying cause.
    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }

    /// Returns whether `other` is an error of the same kind as this one.
    ///
    /// This is true only when `other` is an [`Error`] with the same code type and an equal code.
    /// Causes and messages are never compared.
    pub fn matches(&self, other: &(dyn StdError + 'static)) -> bool {
        match other.downcast_ref::<Error<C>>() {
            Some(other) => other.code == self.code,
            None => false,
        }
    }
}

impl<C: ErrorCode> From<C> for Error<C> {
    fn from(code: C) -> Self {
        Error::new(code)
    }
}

impl<C: ErrorCode> Display for Error<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "({}) {}", self.code.value(), cause),
            None => write!(f, "({}) {}", self.code.value(), UNKNOWN_CAUSE),
        }
    }
}

impl<C: ErrorCode> Debug for Error<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Error").field("code", &self.code).field("cause", &self.cause).finish()
    }
}

impl<C: ErrorCode> StdError for Error<C> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}
