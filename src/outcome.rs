// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use derive_more::{Display, From};

/// Result of a single read attempt against a byte-oriented source.
///
/// One attempt either transfers bytes into the caller's buffer or finds the
/// source already exhausted.
/// The two cases are distinct variants here instead of the `-1` sentinel that
/// count-based read APIs conventionally return; the `From<ReadOutcome>`
/// implementation for `i64` restores that encoding where a signed count is
/// wanted.
#[derive(Clone, Copy, Debug, Display, Eq, From, PartialEq)]
pub enum ReadOutcome {
    /// The source had no more data to provide and nothing was transferred.
    #[display("end of stream")]
    EndOfStream,
    /// This many bytes were placed at the start of the buffer.
    ///
    /// A count of zero only occurs for a zero-capacity buffer.
    #[display("{_0} bytes read")]
    Read(usize),
}

impl ReadOutcome {
    /// Returns the number of transferred bytes, or `None` if the source was exhausted.
    #[must_use]
    pub const fn bytes_read(&self) -> Option<usize> {
        match self {
            Self::EndOfStream => None,
            Self::Read(n) => Some(*n),
        }
    }

    /// Returns `true` if the source had no more data to provide.
    #[must_use]
    pub const fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

/// The conventional signed-count encoding: the number of transferred bytes,
/// or `-1` for an exhausted source.
impl From<ReadOutcome> for i64 {
    fn from(outcome: ReadOutcome) -> i64 {
        match outcome {
            ReadOutcome::EndOfStream => -1,
            ReadOutcome::Read(n) => n as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(ReadOutcome::EndOfStream.bytes_read(), None);
        assert!(ReadOutcome::EndOfStream.is_end_of_stream());

        assert_eq!(ReadOutcome::Read(42).bytes_read(), Some(42));
        assert!(!ReadOutcome::Read(42).is_end_of_stream());
        assert_eq!(ReadOutcome::Read(0).bytes_read(), Some(0));
    }

    #[test]
    fn test_signed_count_encoding() {
        assert_eq!(i64::from(ReadOutcome::EndOfStream), -1);
        assert_eq!(i64::from(ReadOutcome::Read(0)), 0);
        assert_eq!(i64::from(ReadOutcome::Read(512)), 512);
    }

    #[test]
    fn test_from_count() {
        assert_eq!(ReadOutcome::from(5usize), ReadOutcome::Read(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadOutcome::EndOfStream.to_string(), "end of stream");
        assert_eq!(ReadOutcome::Read(3).to_string(), "3 bytes read");
    }
}
