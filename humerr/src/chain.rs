//! Walking and classifying chains of underlying causes.

use crate::error::{Cause, Error};
use crate::error_code::ErrorCode;
use core::error::Error as StdError;
use core::iter::FusedIterator;

/// An iterator over an error and its chain of underlying causes.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}
impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
impl FusedIterator for Chain<'_> {}

/// Returns an iterator over `err`, followed by each of its underlying causes in turn.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Returns whether any error in the chain of `err` is of the same kind as `probe`.
///
/// ```
/// use humerr::{Errno, Error, matches_kind};
///
/// let err = Error::with_cause(Errno::EMEETING, Error::new(Errno::EBORING));
/// assert!(matches_kind(&err, &Error::new(Errno::EBORING)));
/// assert!(!matches_kind(&err, &Error::new(Errno::ENOCOFFEE)));
/// ```
pub fn matches_kind<C: ErrorCode>(err: &(dyn StdError + 'static), probe: &Error<C>) -> bool {
    chain(err).any(|e| probe.matches(e))
}

/// Returns the code of the first [`Error`] with code type `C` in the chain of `err`.
pub fn code_of<C: ErrorCode>(err: &(dyn StdError + 'static)) -> Option<C> {
    chain(err).find_map(|e| e.downcast_ref::<Error<C>>().map(|e| e.code()))
}

/// Extension methods for attaching error codes to results.
pub trait ResultExt<T> {
    /// Wraps the error of this result in an [`Error`] with the given code.
    fn or_code<C: ErrorCode>(self, code: C) -> Result<T, Error<C>>;
}
impl<T, E: Into<Cause>> ResultExt<T> for Result<T, E> {
    fn or_code<C: ErrorCode>(self, code: C) -> Result<T, Error<C>> {
        self.map_err(|e| Error::with_cause(code, e))
    }
}
