//! Errors shared by every stage of a scan.

use thiserror::Error;
use zerocopy::TryFromBytes;

/// An error scanning an input against a format.
///
/// Every variant has a stable negative code, so that results exchanged with C
/// code (or logged by firmware as a bare integer) can be matched exactly. See
/// [`Error::code`] and [`Error::from_code`].
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, TryFromBytes)]
pub enum Error {
    /// A parameter to a conversion was unusable (such as a zero base).
    #[error("Invalid parameter.")]
    InvalidParameter = -1,
    /// No usable output slot for a value that would otherwise be bound.
    #[error("Missing or mismatched output slot.")]
    InvalidArgs = -2,
    /// Malformed conversion specifier in the format.
    #[error("Invalid format specifier.")]
    InvalidFormat = -3,
    /// A literal format character differs from the input.
    #[error("Input doesn't match the format.")]
    InputMismatch = -4,
    /// A token is longer than the width of its specifier.
    #[error("Token is longer than the specifier width.")]
    TokenTooWide = -5,
    /// A token holds no digits at all.
    #[error("Token is not a number.")]
    NotANumber = -6,
    /// A token holds characters after its digits.
    #[error("Token has trailing non-numeric characters.")]
    ExtraCharacters = -7,
    /// A token holds a number outside the range of its destination.
    #[error("Number is out of range.")]
    OutOfRange = -8,
}

impl Error {
    /// The stable negative code of this error.
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Recover an error from its code, if the code names one.
    pub fn from_code(code: i16) -> Option<Self> {
        let code = i8::try_from(code).ok()?;
        let error: Result<Self, _> = zerocopy::try_transmute!(code);
        error.ok()
    }
}

/// Collapse the result of a scan into a single integer: the number of bound
/// values when non-negative, or an error code when negative.
pub fn code(result: Result<usize, Error>) -> i16 {
    match result {
        Ok(count) => i16::try_from(count).unwrap_or(i16::MAX),
        Err(err) => err.code(),
    }
}
