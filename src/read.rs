// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::io::{Read, Result};
use crate::outcome::ReadOutcome;

/// Performs a single bounded read attempt from `source` into `buf`.
///
/// This asks `source` for up to `buf.len()` bytes in exactly one
/// [`Read::read`] call and returns what that call yielded:
/// [`ReadOutcome::Read`] with the number of bytes now sitting at the start of
/// `buf`, or [`ReadOutcome::EndOfStream`] if `source` had nothing left.
/// Bytes of `buf` past the returned count keep whatever they held before.
///
/// A short read (fewer bytes than `buf` has room for, even though the source
/// has more) is a normal outcome and is returned as-is.
/// Callers that need a full buffer have to issue further calls themselves.
///
/// An empty `buf` yields `ReadOutcome::Read(0)` without touching `source`.
///
/// Any error raised by `source` is propagated unchanged.
/// In particular, an interrupted read is not retried here.
pub fn read_once<T>(source: &mut T, buf: &mut [u8]) -> Result<ReadOutcome>
where
    T: Read + ?Sized,
{
    if buf.is_empty() {
        return Ok(ReadOutcome::Read(0));
    }

    match source.read(buf)? {
        0 => Ok(ReadOutcome::EndOfStream),
        n => Ok(ReadOutcome::Read(n)),
    }
}

/// Extension trait providing [`read_once`] as a method on every [`Read`] implementor.
pub trait ReadOnce: Read {
    /// See [`read_once`].
    fn read_once(&mut self, buf: &mut [u8]) -> Result<ReadOutcome> {
        crate::read::read_once(self, buf)
    }
}

impl<T> ReadOnce for T where T: Read + ?Sized {}
