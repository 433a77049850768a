//! Defines the root cause of all errors.
//!
//! An [`Error`] pairs a numeric [`Errno`] with the underlying error that triggered it, if any.
//! Errors are classified by code alone: an error is an `EBORING` however it came to be.
//!
//! ```
//! use humerr::{Errno, Error, matches_kind};
//!
//! let err = Error::with_cause(Errno::ETOOLAZY, "too cumbersome");
//! assert_eq!(err.to_string(), "(101) too cumbersome");
//! assert!(matches_kind(&err, &Error::new(Errno::EINCONVENIENT)));
//! ```

#![no_std]
extern crate alloc;
extern crate self as humerr;

mod chain;
mod errno;
mod error;
mod error_code;

pub use chain::{Chain, ResultExt, chain, code_of, matches_kind};
pub use errno::{Errno, UnknownErrno};
pub use error::{Cause, Error, UNKNOWN_CAUSE};
pub use error_code::{ErrorCode, ErrorCodeInfo};

#[cfg(feature = "derive")]
pub use humerr_derive::ErrorCode;
