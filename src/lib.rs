// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A single-shot bounded read for byte-oriented sources.
//!
//! [`read_once`] asks a [`Read`](crate::io::Read) implementor for up to one
//! buffer's worth of bytes, exactly once, and reports how many bytes arrived
//! or that the source is exhausted.
//! A short read is a normal outcome here and is surfaced verbatim; this crate
//! never loops to fill the buffer, never buffers on its own, and never touches
//! an error beyond handing it to the caller.
//!
//! The crate works in both `std` and `no_std` environments (see the [`io`]
//! module for what changes without the default `std` feature).

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

pub mod io;
mod outcome;
mod read;

pub use crate::outcome::*;
pub use crate::read::*;
