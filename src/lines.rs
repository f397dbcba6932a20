//! Line-by-line scanning of a reader.
//!
//! _Requires Cargo feature `std`._

use std::{io::BufRead, vec::Vec};

use thiserror::Error;

use crate::scan::{FromTokens, scan};

extern crate std;

/// Errors occurring while scanning lines from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line failed to scan.
    #[error("Line {line}: {source}")]
    Scan { line: usize, source: crate::Error },
}

/// Reads lines from a reader into an owned buffer, scanning each in turn.
///
/// Line endings (`\n` or `\r\n`) are stripped before scanning. Since tokens
/// borrow the buffer, values bound from a line must be used before the next
/// line is read.
///
/// # Example
///
/// ```
/// use strsepf::{Slot, lines::LineScanner};
///
/// let mut lines = LineScanner::new(std::io::stdin().lock());
///
/// loop {
///     let (mut fix, mut quality) = (&b""[..], 0);
///     let slots = &mut [Some(Slot::Str(&mut fix)), Some(Slot::U32(&mut quality))];
///
///     match lines.scan_next("$GPGGA,%s,%*s,%*s,%*s,%*s,%u,", slots)? {
///         Some(2) => println!("{} {quality}", str::from_utf8(fix)?),
///         Some(_) => continue,
///         None => break,
///     }
/// }
/// ```
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// The 1-based number of the last line read, or zero before the first.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Give back the reader, positioned after the last line read.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next line and scan it against a format, binding values to a
    /// receiver.
    ///
    /// Returns the number of bound values, or `None` at the end of the reader.
    pub fn scan_next<'s, O>(
        &'s mut self,
        fmt: impl AsRef<[u8]>,
        o: &mut O,
    ) -> Result<Option<usize>, Error>
    where
        O: FromTokens<'s> + ?Sized,
    {
        self.buf.clear();

        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        self.line += 1;
        let line = self.line;

        let line_ending = match self.buf.as_slice() {
            [.., b'\r', b'\n'] => 2,
            [.., b'\n'] => 1,
            _ => 0,
        };
        let end = self.buf.len() - line_ending;

        scan(&mut self.buf[..end], fmt, o)
            .map(Some)
            .map_err(|source| Error::Scan { line, source })
    }
}
