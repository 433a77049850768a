//! Tests for `#[derive(ErrorCode)]` on user-defined enums.

use humerr::{Errno, Error, ErrorCode, code_of, matches_kind};

#[derive(ErrorCode, Copy, Clone, Debug, PartialEq, Eq)]
enum Status {
    /// Operation too cumbersome, but over HTTP
    Lazy = 101,
    /// Not found
    ///
    /// Only the first line of the docs becomes the description.
    NotFound = 404,
    /// I'm a teapot
    Teapot = 418,
    Undocumented = 500,
}

#[test]
fn table() {
    assert_eq!(
        Status::VARIANTS,
        &[Status::Lazy, Status::NotFound, Status::Teapot, Status::Undocumented]
    );
    assert_eq!(Status::Teapot.value(), 418);
    assert_eq!(Status::Teapot.name(), "Teapot");
    assert_eq!(Status::Teapot.info().type_name, "Status");
}

#[test]
fn descriptions() {
    assert_eq!(Status::NotFound.description(), "Not found");
    assert_eq!(Status::Teapot.description(), "I'm a teapot");
    assert_eq!(Status::Undocumented.info().message, None);
    assert_eq!(Status::Undocumented.description(), "");
}

#[test]
fn lookup() {
    assert_eq!(Status::from_value(404), Some(Status::NotFound));
    assert_eq!(Status::from_value(405), None);
    assert_eq!(Status::from_name("Lazy"), Some(Status::Lazy));
}

#[test]
fn matching_respects_code_type() {
    let status = Error::new(Status::Lazy);
    let errno = Error::new(Errno::ETOOLAZY);
    assert_eq!(status.to_string(), errno.to_string());

    assert!(status.matches(&Error::with_cause(Status::Lazy, "slow")));
    assert!(!status.matches(&errno));
    assert!(!errno.matches(&status));
}

#[test]
fn chain_across_code_types() {
    let err = Error::with_cause(Errno::ENIH, Error::new(Status::NotFound));
    assert!(matches_kind(&err, &Error::new(Status::NotFound)));
    assert!(!matches_kind(&err, &Error::new(Status::Teapot)));
    assert_eq!(code_of::<Status>(&err), Some(Status::NotFound));
    assert_eq!(code_of::<Errno>(&err), Some(Errno::ENIH));
}

#[derive(ErrorCode, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
enum Wide {
    /// Largest code there is
    Max = 4_294_967_295,
}

#[test]
fn full_u32_range() {
    assert_eq!(Wide::Max.value(), u32::MAX);
    assert_eq!(Wide::from_value(u32::MAX), Some(Wide::Max));
    assert_eq!(Error::new(Wide::Max).to_string(), "(4294967295) 🤷");
}
