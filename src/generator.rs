//! Drawing a code from a seed.

use std::fmt;

use tracing::trace;

use crate::random::{Algorithm, CodeRng};
use crate::seed::Seed;

/// A pseudo-random value in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Code(f64);

impl Code {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Code {
    /// Shortest round-trip rendering that always keeps a decimal point
    /// or exponent (`0.0`, not `0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Seed a fresh generator and draw exactly one code from it.
pub fn generate(seed: &Seed, algorithm: Algorithm) -> Code {
    let mut rng = match seed.narrow() {
        Some(state) => CodeRng::new(algorithm, state),
        None => CodeRng::from_wide_seed(algorithm, &seed.value.to_signed_bytes_le()),
    };
    let value = rng.sample_f64();
    trace!(seed = %seed.value, %algorithm, value, "drew code");
    Code(value)
}
