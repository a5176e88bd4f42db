// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Reads a file in fixed-size chunks via `read_once` and reports what every
//! single attempt yielded.
//! Run it on a pipe or a character device to watch short reads happen.

use std::env;
use std::fs::File;

use anyhow::{bail, Context, Result};
use read_once::{read_once, ReadOutcome};

const CHUNK_SIZE: usize = 4096;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("Usage: chunks FILE"),
    };

    let mut file = File::open(&path).with_context(|| format!("Cannot open \"{path}\""))?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut attempts = 0u64;
    let mut total = 0u64;

    loop {
        match read_once(&mut file, &mut buf)? {
            ReadOutcome::EndOfStream => break,
            ReadOutcome::Read(n) => {
                attempts += 1;
                total += n as u64;
                println!("attempt {attempts}: {n} bytes");
            }
        }
    }

    println!("{total} bytes in {attempts} attempts");
    Ok(())
}
