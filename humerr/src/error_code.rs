//! Contains the error code API.

use core::fmt::Debug;

/// Represents the info underlying an error code.
#[derive(Debug)]
pub struct ErrorCodeInfo {
    /// The numeric value of this error code.
    pub value: u32,

    /// The name of the type underlying this error code.
    pub type_name: &'static str,

    /// The name of this error code.
    pub variant_name: &'static str,

    /// The raw description of this error code, taken from its doc comment.
    pub message: Option<&'static str>,
}

/// A type that can be used as an error code for this crate.
///
/// This is normally implemented with `#[derive(ErrorCode)]` (behind the `derive` feature), which
/// builds the static code table from the enum's variants and their doc comments.
pub trait ErrorCode: 'static + Copy + Eq + Debug + Send + Sync {
    /// Every code of this type, in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the static info for this error code.
    fn info(self) -> &'static ErrorCodeInfo;

    /// Returns the numeric value of this error code.
    fn value(self) -> u32 {
        self.info().value
    }

    /// Returns the name of this error code, e.g. `ETOOLAZY`.
    fn name(self) -> &'static str {
        self.info().variant_name
    }

    /// Returns the human description of this error code, or an empty string if there is none.
    fn description(self) -> &'static str {
        self.info().message.map_or("", str::trim)
    }

    /// Returns the error code with a given numeric value.
    fn from_value(value: u32) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|code| code.value() == value)
    }

    /// Returns the error code with a given name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|code| code.name() == name)
    }
}
