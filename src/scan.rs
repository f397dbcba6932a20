//! The scanning driver.
//!
//! [`scan`] walks the format and the input together, left to right. Literal
//! format bytes must match the input exactly. Each specifier carves a token
//! off the input (see [`crate::token`]), which is then converted and bound to
//! the next slot handed out by a [`FromTokens`] receiver.
//!
//! Scanning stops without error as soon as either the format or the input is
//! exhausted, so trailing specifiers that are never reached are not errors,
//! and neither is unconsumed trailing input. Scanning stops with an error at
//! the first failure; values bound before it are kept.

pub mod slot;

pub use slot::{FromTokens, IntoSlot, Slot};

use either::Either::{Left, Right};

use crate::{
    Error,
    format::{self, Kind},
    number,
    token::Input,
};

/// Scan a buffer against a format, binding values to a receiver.
///
/// The buffer is split in place: every terminator byte that delimits a token
/// is overwritten with NUL. Scanning also stops at the first NUL byte already
/// present in the buffer.
///
/// Returns the number of bound values. Suppressed specifiers are never
/// counted.
///
/// # Example
///
/// ```
/// use strsepf::Slot;
///
/// let mut msg = *b"$GPBWC,081837,,,,,,T,,M,,N,*13";
///
/// let mut time = 0;
/// let mut waypoint: &[u8] = &[];
///
/// let n = strsepf::scan(
///     &mut msg,
///     "$%*sBWC,%d,%*s,%*s,%*s,%*s,%*s,%s,",
///     &mut [Some(Slot::I32(&mut time)), Some(Slot::Str(&mut waypoint))],
/// )?;
///
/// assert_eq!((n, time, waypoint), (2, 81837, &b"T"[..]));
/// ```
pub fn scan<'b, O>(buf: &'b mut [u8], fmt: impl AsRef<[u8]>, o: &mut O) -> Result<usize, Error>
where
    O: FromTokens<'b> + ?Sized,
{
    let mut fmt = fmt.as_ref();
    let mut input = Input::new(buf);
    let mut count = 0;

    loop {
        let Some((&c, rest)) = fmt.split_first() else {
            break;
        };

        if input.is_empty() {
            break;
        }

        if c != b'%' {
            if input.first() != Some(c) {
                Err(Error::InputMismatch)?;
            }

            fmt = rest;
            input.skip();
            continue;
        }

        let spec = match format::scan(&mut fmt)? {
            Left(spec) => spec,
            Right(format::Escape) => {
                input.skip();
                continue;
            }
        };

        let token = input.carve(&mut fmt, &spec)?;

        if spec.suppressed {
            continue;
        }

        let slot = o.slot(count).ok_or(Error::InvalidArgs)?;
        bind(slot, spec.kind, token)?;

        count += 1;
    }

    Ok(count)
}

/// Convert a token for a kind of specifier, and write it to a slot.
///
/// The slot is checked before conversion, and written only on success.
fn bind<'b>(slot: Slot<'_, 'b>, kind: Kind, token: &'b [u8]) -> Result<(), Error> {
    match (slot, kind.base()) {
        (Slot::Str(s), None) => *s = token,
        (Slot::I32(s), Some(base)) if kind == Kind::Signed => {
            *s = number::parse_i32(token, base)?;
        }
        (Slot::U32(s), Some(base)) if kind != Kind::Signed => {
            *s = number::parse_u32(token, base)?;
        }
        _ => Err(Error::InvalidArgs)?,
    }

    Ok(())
}
