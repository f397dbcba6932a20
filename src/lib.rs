#![no_std]

//! A destructive, allocation-free tokenizer with a `scanf`-like interface.
//!
//! strsepf splits a mutable input buffer on the literal characters of a
//! format, in the manner of `strsep`, and converts the resulting tokens to
//! 32-bit integers or leaves them as byte slices. It is intended for firmware
//! parsing line-oriented ASCII protocols (NMEA sentences, AT command
//! responses, comma-separated fields) where `sscanf` is unavailable or
//! unwelcome.
//!
//! - The input buffer is modified: each terminator is overwritten with NUL.
//! - Nothing is allocated or copied; string tokens borrow the buffer.
//! - There is no floating point support.
//!
//! Most users should begin with [`scan`], supplying either an array of
//! [`Slot`]s or a struct deriving [`FromTokens`](macro@FromTokens).
//!
//! ```
//! use strsepf::Slot;
//!
//! let mut ip = *b"192.168.0.13";
//! let mut octets = [0u32; 4];
//!
//! let [a, b, c, d] = &mut octets;
//! let slots = &mut [a, b, c, d].map(|o| Some(Slot::U32(o)));
//!
//! assert_eq!(strsepf::scan(&mut ip, "%3u.%3u.%3u.%3u", slots), Ok(4));
//! assert_eq!(octets, [192, 168, 0, 13]);
//! ```
//!
//! # Format
//!
//! | Element      | Description                                                 |
//! |--------------|-------------------------------------------------------------|
//! | `%d`, `%i`   | A signed decimal number.                                    |
//! | `%u`         | An unsigned decimal number.                                 |
//! | `%x`         | An unsigned hexadecimal number, optionally prefixed `0x`.   |
//! | `%o`         | An unsigned octal number.                                   |
//! | `%b`         | An unsigned binary number.                                  |
//! | `%s`         | A token with any characters in it.                          |
//! | `%%`         | Skips a single input character, whatever it is.             |
//! | `%*`_type_   | Consumes a token without binding or counting it.            |
//! | `%`_N_ _type_| Fails if the token is longer than _N_ characters.           |
//! | other        | Must match the input character exactly.                     |
//!
//! A specifier's token runs up to the first occurrence of the format
//! character following it, or to the end of the input if it is the last
//! element of the format, or if that character never occurs.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable the reader-based line scanner (default).

pub mod error;
pub mod format;
#[cfg(feature = "std")]
pub mod lines;
pub mod number;
pub mod scan;
pub mod token;

pub use error::{Error, code};
pub use scan::{FromTokens, IntoSlot, Slot, scan};

/// Derive [`FromTokens`] for a struct receiving bound values in its fields.
///
/// _Requires Cargo feature `derive`._
///
/// Add the `token(N)` attribute to a field to receive the value numbered `N`
/// (counting from zero, and skipping suppressed specifiers). The field must
/// implement [`IntoSlot`]: `u32`, `i32`, or `&[u8]`. Fields without the
/// attribute are left untouched, and values numbered without a field fail
/// the scan with [`Error::InvalidArgs`].
///
/// ```
/// #[derive(Debug, Default, FromTokens)]
/// struct Address<'a> {
///     #[token(0)]
///     number: i32,
///     #[token(1)]
///     street: &'a [u8],
/// }
///
/// let mut line = *b"1. my address is 890 rue de la rose, CAN.";
/// let mut address = Address::default();
///
/// let n = strsepf::scan(&mut line, "%*d. %*s %*s %*s %d %s, %*s", &mut address);
///
/// assert_eq!(n, Ok(2));
/// assert_eq!(address.street, b"rue de la rose");
/// ```
#[cfg(feature = "derive")]
pub use strsepf_derive::FromTokens;
