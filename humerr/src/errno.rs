//! The human errno codes.
//!
//! Based on "Root Cause: Human Errno" by Jan Schaumann, see
//! <https://www.netmeister.org/blog/humanerrno.html>.

use crate::error_code::ErrorCode;
use core::fmt::{Display, Formatter};

/// A numeric error code describing the root cause of an error.
#[derive(humerr_derive::ErrorCode, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Errno {
    /// Operation too cumbersome
    ETOOLAZY = 101,
    /// Operation timed out
    EBORING,
    /// Information overload
    ETLDR,
    /// Cache miss
    EFORGOT,
    /// Persistent lookup failure
    ENOCLUE,
    /// Endless loop
    EBIKESHED,
    /// Erroneous consensus
    EGROUPTHINK,
    /// Indirect assignment
    ENOTIT,
    /// Can't delete my own work
    EIKEA,
    /// Import failure
    ENIH,
    /// Indirect cache miss
    ELMGTFY,
    /// Unexpected status quo
    ESNAFU,
    /// Insufficient pay grade or deferred responsibility
    ESEP,
    /// Insufficient amount of pie
    ENOTENOUGHPI,
    /// Energy starvation
    ENOCOFFEE,
    /// User error
    EPEBKAC,
    /// Ruckus applied, unfuckwithably
    EWUTANG,
    /// Interrupted distraction
    ECOMPILING,
    /// Distributed SPOF
    EGITHUB,
    /// Information disclosure
    EGITPUB,
    /// Inefficient interrupt
    EMEETING,
    /// Inefficient persistent interrupt
    EMAIL,
    /// Input error
    ETYOP,
    /// Access denied
    EBOFH,
    /// Failsafe disabled
    EYOLO,
    /// Process temporarily suspended
    EASLEEP,
    /// Unfunded speculation
    EIANAL,
    /// Pointlessly pending review
    EPLUSONE,
    /// Forced completion
    ESLOPPY,
    /// Superflous commentary
    EWELLACTUALLY,
    /// Incorrect number of $@%{
    EPERL,
    /// Errno exception factory
    EJAVA,
    /// Universal Freudian slip
    EPYTHONG,
    /// Fubar
    EPHP,
    /// Self-inflicted DoS
    ERMFR,
    /// Information retrieval impossible
    EWIKI,
    /// Too many developers
    EBROOKS,
    /// Command injection
    EBOBBYTABLES,
    /// Inflated self-evaluation
    EUNICORN,
    /// Misunderstood copy and paste
    ESTACKOVERFLOWN,
    /// Information disclosure as a Service
    ESLACKED,
    /// Mental resource exhaustion
    EDGAF,
    /// But no generics
    EGOLANG,
}
impl Errno {
    /// Defined for portability.
    pub const EINCONVENIENT: Errno = Errno::ETOOLAZY;
}

impl Display for Errno {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name(), self.description())
    }
}

/// The error returned when converting a number that is not a known [`Errno`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrno(pub u8);
impl Display for UnknownErrno {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown errno: {}", self.0)
    }
}
impl core::error::Error for UnknownErrno {}

impl TryFrom<u8> for Errno {
    type Error = UnknownErrno;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Errno::from_value(u32::from(value)).ok_or(UnknownErrno(value))
    }
}

impl From<Errno> for u8 {
    fn from(value: Errno) -> Self {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn values_are_contiguous() {
        assert_eq!(Errno::VARIANTS.len(), 43);
        for (i, code) in Errno::VARIANTS.iter().enumerate() {
            assert_eq!(code.value(), 101 + i as u32);
        }
        assert_eq!(Errno::ENOCLUE.value(), 105);
        assert_eq!(Errno::EGOLANG.value(), 143);
    }

    #[test]
    fn alias() {
        assert_eq!(Errno::EINCONVENIENT, Errno::ETOOLAZY);
        assert_eq!(Errno::EINCONVENIENT.value(), 101);
        assert_eq!(Errno::EINCONVENIENT.name(), "ETOOLAZY");
    }

    #[test]
    fn info() {
        let info = Errno::EPERL.info();
        assert_eq!(info.type_name, "Errno");
        assert_eq!(info.variant_name, "EPERL");
        assert_eq!(Errno::EPERL.description(), "Incorrect number of $@%{");
        assert_eq!(Errno::ESEP.description(), "Insufficient pay grade or deferred responsibility");
    }

    #[test]
    fn display() {
        assert_eq!(Errno::EBOFH.to_string(), "EBOFH: Access denied");
    }

    #[test]
    fn lookup() {
        assert_eq!(Errno::from_name("EYOLO"), Some(Errno::EYOLO));
        assert_eq!(Errno::from_name("EINCONVENIENT"), None);
        assert_eq!(Errno::try_from(116), Ok(Errno::EPEBKAC));
        assert_eq!(Errno::try_from(100), Err(UnknownErrno(100)));
        assert_eq!(Errno::try_from(144), Err(UnknownErrno(144)));
        assert_eq!(u8::from(Errno::EGOLANG), 143);
    }
}
