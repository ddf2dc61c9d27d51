//! Seedcode - seed a pseudo-random generator and print one code.
//!
//! A run reads a seed (typed by the user, or the current time when the
//! response is empty), seeds a generator with it, draws one value in
//! [0, 1) and prints it as `Code: <value>`.
//!
//! # Modules
//!
//! - [`seed`] - Prompting for and parsing the seed
//! - [`generator`] - Drawing a [`Code`] from a [`Seed`]
//! - [`report`] - Printing the code
//! - [`random`] - Seedable generators ([`Algorithm`], [`CodeRng`])
//! - [`time`] - Clock sources for time-derived seeds
//!
//! # Error Handling
//!
//! All operations use the consolidated [`Error`] type. A non-empty seed
//! response that is not a base-10 integer is fatal, and so is end of input
//! before a response; neither falls back to the clock.

use std::io::{BufRead, Write};

use tracing::debug;

pub mod generator;
pub mod random;
pub mod report;
pub mod seed;
pub mod time;

/// Consolidated error type for all Seedcode operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid seed '{input}': {source}")]
    MalformedSeed {
        input: String,
        source: num_bigint::ParseBigIntError,
    },

    #[error("end of input while reading seed")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

pub use generator::{Code, generate};
pub use random::{Algorithm, CodeRng, XorShift64, compress_seed};
pub use report::report;
pub use seed::{PROMPT, Seed, SeedSource, parse_seed, read_seed};
pub use time::{Clock, FixedClock, SystemClock};

/// Options for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed text given up front. When set, no prompt is shown and nothing
    /// is read from input.
    pub seed: Option<String>,

    /// Generator algorithm.
    pub algorithm: Algorithm,
}

/// Resolve a seed, draw one code and report it.
///
/// Returns the reported code. On error nothing is written after the prompt.
pub fn generate_code<C, R, W>(
    config: &Config,
    clock: &C,
    input: &mut R,
    output: &mut W,
) -> Result<Code>
where
    C: Clock + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let seed = match &config.seed {
        Some(text) => parse_seed(text, clock)?,
        None => read_seed(input, output, clock)?,
    };
    debug!(
        seed = %seed.value,
        source = ?seed.source,
        algorithm = %config.algorithm,
        "seed resolved"
    );

    let code = generate(&seed, config.algorithm);
    report(output, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(config: &Config, clock: &dyn Clock, input: &str) -> (Result<Code>, String) {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let result = generate_code(config, clock, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_typed_seed_end_to_end() {
        let (result, output) = run(&Config::default(), &FixedClock(0), "42\n");
        assert_eq!(result.unwrap().value(), 0.6818961923066714);
        assert_eq!(output, format!("{PROMPT}Code: 0.6818961923066714\n"));
    }

    #[test]
    fn test_empty_input_uses_injected_time() {
        let (result, output) = run(&Config::default(), &FixedClock(1_700_000_000), "\n");
        assert_eq!(result.unwrap().value(), 0.7689983375981702);
        assert_eq!(output, format!("{PROMPT}Code: 0.7689983375981702\n"));
    }

    #[test]
    fn test_malformed_input_prints_no_code() {
        let (result, output) = run(&Config::default(), &FixedClock(0), "not-a-number\n");
        assert!(matches!(result, Err(Error::MalformedSeed { .. })));
        assert_eq!(output, PROMPT);
        assert!(!output.contains("Code:"));
    }

    #[test]
    fn test_end_of_input_prints_no_code() {
        let (result, output) = run(&Config::default(), &FixedClock(1_700_000_000), "");
        assert!(matches!(result, Err(Error::EndOfInput)));
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn test_wide_seed_end_to_end() {
        let (first, output) = run(&Config::default(), &FixedClock(0), "99999999999999999999\n");
        let (second, _) = run(&Config::default(), &FixedClock(0), "99999999999999999999\n");
        let code = first.unwrap();
        assert_eq!(code, second.unwrap());
        assert!((0.0..1.0).contains(&code.value()));
        assert_eq!(output, format!("{PROMPT}Code: {code}\n"));
    }

    #[test]
    fn test_configured_seed_skips_prompt() {
        let config = Config {
            seed: Some("42".to_string()),
            algorithm: Algorithm::XorShift64,
        };
        let (result, output) = run(&config, &FixedClock(0), "this is never read\n");
        let code = result.unwrap();
        assert_eq!(code, generate(&Seed::from_input(42), Algorithm::XorShift64));
        assert_eq!(output, format!("Code: {code}\n"));
    }

    #[test]
    fn test_configured_empty_seed_uses_clock() {
        let config = Config {
            seed: Some(String::new()),
            ..Config::default()
        };
        let (result, _) = run(&config, &FixedClock(1_700_000_000), "");
        assert_eq!(
            result.unwrap(),
            generate(&Seed::from_clock(1_700_000_000), Algorithm::ChaCha8)
        );
    }

    #[test]
    fn test_wall_clock_seed_within_window() {
        let before = SystemClock.now_secs();
        let (result, _) = run(&Config::default(), &SystemClock, "\n");
        let after = SystemClock.now_secs();
        let code = result.unwrap();
        let matches_window = (before..=after)
            .any(|secs| generate(&Seed::from_clock(secs), Algorithm::ChaCha8) == code);
        assert!(matches_window);
    }
}
