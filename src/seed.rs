//! Seed resolution from a prompt response or the clock.

use std::io::{BufRead, Write};

use num_bigint::BigInt;
use tracing::debug;

use crate::time::Clock;
use crate::{Error, Result};

/// Prompt shown before reading the seed line.
pub const PROMPT: &str = "Enter a time, or leave blank to use the current time for seed value: ";

/// Where a seed value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Parsed from user-supplied text.
    Input,
    /// Taken from the clock because the input was empty.
    Clock,
}

/// Integer used to seed the code generator. Any width is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub value: BigInt,
    pub source: SeedSource,
}

impl Seed {
    pub fn from_input(value: impl Into<BigInt>) -> Self {
        Self {
            value: value.into(),
            source: SeedSource::Input,
        }
    }

    pub fn from_clock(secs: i64) -> Self {
        Self {
            value: secs.into(),
            source: SeedSource::Clock,
        }
    }

    /// Two's-complement bit pattern as a `u64`, when the value fits in `i64`.
    pub fn narrow(&self) -> Option<u64> {
        i64::try_from(&self.value).ok().map(|value| value as u64)
    }
}

/// Turn a response line into a seed.
///
/// A trailing `\n` or `\r\n` is dropped first. Empty text reads the clock;
/// anything else must be a base-10 integer, surrounding whitespace allowed.
pub fn parse_seed<C: Clock + ?Sized>(line: &str, clock: &C) -> Result<Seed> {
    let text = strip_line_ending(line);
    if text.is_empty() {
        let seed = Seed::from_clock(clock.now_secs());
        debug!(seed = %seed.value, "empty seed input, using clock");
        return Ok(seed);
    }

    let value = text
        .trim()
        .parse::<BigInt>()
        .map_err(|source| Error::MalformedSeed {
            input: text.to_string(),
            source,
        })?;
    debug!(seed = %value, "parsed seed from input");
    Ok(Seed::from_input(value))
}

/// Prompt on `output`, read one line from `input`, and resolve it.
///
/// End of input before any byte is an error, not an empty line.
pub fn read_seed<R, W, C>(input: &mut R, output: &mut W, clock: &C) -> Result<Seed>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    C: Clock + ?Sized,
{
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::EndOfInput);
    }
    parse_seed(&line, clock)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
