//! Destructive extraction of tokens from an input buffer.
//!
//! Tokens are carved off the front of the buffer by splitting on a single
//! terminator byte, which is overwritten with NUL. Tokens are views into the
//! buffer; nothing is copied.

use core::mem;

use either::Either::{self, Left, Right};

use crate::{Error, format::Specifier};

/// The unconsumed part of an input buffer.
#[derive(Debug)]
pub struct Input<'b> {
    rest: &'b mut [u8],
}

impl<'b> Input<'b> {
    /// Wrap a buffer, ending it at its first NUL byte (if any).
    pub fn new(buf: &'b mut [u8]) -> Self {
        let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        Self {
            rest: &mut buf[..end],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rest.len()
    }

    /// The next byte of input, if any.
    pub fn first(&self) -> Option<u8> {
        self.rest.first().copied()
    }

    /// Advance past a single byte without inspecting it.
    pub fn skip(&mut self) {
        let rest = mem::take(&mut self.rest);
        self.rest = rest.get_mut(1..).unwrap_or_default();
    }

    /// Take the remainder of the input as a token.
    pub fn take_rest(&mut self) -> &'b [u8] {
        let rest: &'b mut [u8] = mem::take(&mut self.rest);
        rest
    }

    /// Split the input at the first occurrence of a terminator, overwriting it
    /// with NUL and advancing past it.
    ///
    /// Returns the token before the terminator, or if the terminator does not
    /// occur, the whole remainder (leaving the input empty).
    pub fn split(&mut self, terminator: u8) -> Either<&'b [u8], &'b [u8]> {
        let rest = mem::take(&mut self.rest);

        match rest.iter().position(|&c| c == terminator) {
            Some(i) => {
                let (token, tail) = rest.split_at_mut(i);

                if let Some((t, tail)) = tail.split_first_mut() {
                    *t = 0;
                    self.rest = tail;
                }

                Left(token)
            }
            None => Right(rest),
        }
    }

    /// Carve the token for a specifier whose type character has just been
    /// scanned from `fmt`.
    ///
    /// If the specifier ends the format, the token is the remainder of the
    /// input. Otherwise the next format byte is the terminator, and the format
    /// is advanced past it. Widths are enforced for unsuppressed specifiers.
    pub fn carve(&mut self, fmt: &mut &[u8], spec: &Specifier) -> Result<&'b [u8], Error> {
        if self.is_empty() {
            Err(Error::InputMismatch)?;
        }

        let f: &[u8] = *fmt;

        let token = match f {
            [] => self.take_rest(),
            [terminator, rest @ ..] => {
                *fmt = rest;
                self.split(*terminator).into_inner()
            }
        };

        if !spec.suppressed && spec.width != 0 && token.len() as u64 > u64::from(spec.width) {
            Err(Error::TokenTooWide)?;
        }

        Ok(token)
    }
}
