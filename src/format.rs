//! Scanning of conversion specifiers.
//!
//! A specifier follows the prototype `%[*][width]type`, where the optional
//! flags may appear in any order and `type` is one of `d`, `i`, `u`, `o`, `x`,
//! `b` or `s`. A `%%` pair is an escape rather than a specifier.

use either::Either::{self, Left, Right};

use crate::{Error, number};

/// The kind of value extracted by a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `%d`, `%i`
    Signed,
    /// `%u`
    Unsigned,
    /// `%o`
    Octal,
    /// `%x`
    Hex,
    /// `%b`
    Binary,
    /// `%s`
    String,
}

impl Kind {
    /// Recognize a type character, ending a specifier.
    pub fn from_type(c: u8) -> Option<Self> {
        match c {
            b'd' | b'i' => Some(Self::Signed),
            b'u' => Some(Self::Unsigned),
            b'o' => Some(Self::Octal),
            b'x' => Some(Self::Hex),
            b'b' => Some(Self::Binary),
            b's' => Some(Self::String),
            _ => None,
        }
    }

    /// The base used to convert tokens of this kind, if numeric.
    pub fn base(self) -> Option<u8> {
        match self {
            Self::Signed | Self::Unsigned => Some(10),
            Self::Octal => Some(8),
            Self::Hex => Some(16),
            Self::Binary => Some(2),
            Self::String => None,
        }
    }
}

/// A conversion specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifier {
    pub kind: Kind,
    /// Maximum token length, or zero if unconstrained.
    pub width: u32,
    /// Whether the token is consumed without being bound.
    pub suppressed: bool,
}

/// A `%%` escape, skipping a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape;

/// Scan one specifier from a format positioned at a `%`.
///
/// On success, advances the format past the specifier (including its type
/// character) or the escape.
pub fn scan(fmt: &mut &[u8]) -> Result<Either<Specifier, Escape>, Error> {
    let f: &[u8] = *fmt;

    let mut r = match f {
        [b'%', b'%', rest @ ..] => {
            *fmt = rest;
            return Ok(Right(Escape));
        }
        [b'%', rest @ ..] => rest,
        _ => Err(Error::InvalidFormat)?,
    };

    let mut suppressed = false;
    let mut width = 0;

    let kind = loop {
        match r {
            [] => Err(Error::InvalidFormat)?,
            [b'*', rest @ ..] => {
                suppressed = true;
                r = rest;
            }
            [b'1'..=b'9', ..] => {
                let run = r.iter().take_while(|c| c.is_ascii_digit()).count();
                let (digits, rest) = r.split_at(run);

                // A width must be followed by more of the specifier.
                if rest.is_empty() {
                    Err(Error::InvalidFormat)?;
                }

                width = number::parse_u32(digits, 10).map_err(|_| Error::InvalidFormat)?;
                r = rest;
            }
            [c, rest @ ..] => {
                let kind = Kind::from_type(*c).ok_or(Error::InvalidFormat)?;
                r = rest;
                break kind;
            }
        }
    };

    *fmt = r;

    Ok(Left(Specifier {
        kind,
        width,
        suppressed,
    }))
}
