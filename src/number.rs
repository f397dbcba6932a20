//! Conversion of tokens to 32-bit integers.
//!
//! A token must be wholly numeric: optional leading whitespace (the C
//! `isspace` set, so including vertical tab), an optional sign, an optional
//! `0x` or `0X` prefix in base 16, then one or more digits of the base, and
//! nothing after them.
//!
//! Failures are classified in order: no digits ([`Error::NotANumber`]),
//! trailing characters ([`Error::ExtraCharacters`]), then magnitude
//! ([`Error::OutOfRange`]). A token such as `99999999999z` is therefore
//! reported for its trailing `z` rather than its size.

use crate::Error;

/// Convert a token to an unsigned 32-bit integer in the given base.
///
/// A minus sign is only accepted before a zero magnitude; any other negative
/// number is out of range.
pub fn parse_u32(r: &[u8], base: u8) -> Result<u32, Error> {
    let Digits {
        negative,
        magnitude,
    } = digits(r, base)?;

    if negative && magnitude != 0 {
        Err(Error::OutOfRange)?;
    }

    Ok(magnitude)
}

/// Convert a token to a signed 32-bit integer in the given base.
///
/// A sign is accepted in every base, and applies to the magnitude that
/// follows it (so `-0x10` in base 16 is `-16`).
pub fn parse_i32(r: &[u8], base: u8) -> Result<i32, Error> {
    let Digits {
        negative,
        magnitude,
    } = digits(r, base)?;

    let value = if negative {
        -i64::from(magnitude)
    } else {
        i64::from(magnitude)
    };

    i32::try_from(value).map_err(|_| Error::OutOfRange)
}

/// The sign and magnitude of a wholly numeric token.
#[derive(Debug)]
struct Digits {
    negative: bool,
    magnitude: u32,
}

fn digits(r: &[u8], base: u8) -> Result<Digits, Error> {
    if !(2..=36).contains(&base) {
        Err(Error::InvalidParameter)?;
    }

    let skip = r.iter().take_while(|&&c| is_space(c)).count();
    let r = &r[skip..];

    let (negative, r) = match r {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, r),
    };

    // The prefix only counts when a digit follows it; `0x` alone is a zero
    // with a trailing `x`.
    let r = match r {
        [b'0', b'x' | b'X', rest @ ..]
            if base == 16 && rest.first().is_some_and(u8::is_ascii_hexdigit) =>
        {
            rest
        }
        _ => r,
    };

    let mut magnitude = Some(0u32);
    let mut consumed = 0;

    for &c in r {
        let Some(digit) = char::from(c).to_digit(base.into()) else {
            break;
        };

        // Keep consuming after an overflow, so that trailing characters take
        // precedence.
        magnitude = magnitude.and_then(|m| m.checked_mul(base.into())?.checked_add(digit));
        consumed += 1;
    }

    if consumed == 0 {
        Err(Error::NotANumber)?;
    }

    if consumed != r.len() {
        Err(Error::ExtraCharacters)?;
    }

    Ok(Digits {
        negative,
        magnitude: magnitude.ok_or(Error::OutOfRange)?,
    })
}

/// `u8::is_ascii_whitespace`, plus the vertical tab.
fn is_space(c: u8) -> bool {
    c.is_ascii_whitespace() || c == b'\x0B'
}
