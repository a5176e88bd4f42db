// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Mostly imported from https://github.com/rust-lang/rust/blob/561364e4d5ccc506f610208a4989e91fdbdc8ca7/library/std/src/io/mod.rs

use super::Result;

/// Simplified version of [`std::io::Read`] for `no_std` environments.
///
/// See its documentation for more details.
pub trait Read {
    /// See [`std::io::Read::read`].
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}
