//! Seedable pseudo-random number generators for code generation.
//!
//! Every draw goes through an explicitly constructed [`CodeRng`] owned by the
//! caller. There is no process-wide generator state, so two generators built
//! from the same seed and algorithm always produce the same sequence.

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Replacement state for a zero xorshift seed (zero is the fixed point).
pub const ZERO_SEED_REMAP: u64 = 0x853c49e6748fea9b;

/// Pseudo-random algorithm backing a [`CodeRng`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// ChaCha with 8 rounds, from `rand_chacha`.
    #[default]
    ChaCha8,
    /// 64-bit xorshift (13, 7, 17).
    XorShift64,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::ChaCha8, Algorithm::XorShift64];

    /// Canonical lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::ChaCha8 => "chacha8",
            Algorithm::XorShift64 => "xorshift64",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected one of: chacha8, xorshift64)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// A 64-bit xorshift generator.
///
/// Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Seed the generator. A zero seed is remapped to [`ZERO_SEED_REMAP`].
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REMAP } else { seed };
        Self { state }
    }
}

impl RngCore for XorShift64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(buf);
        Ok(())
    }
}

impl SeedableRng for XorShift64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Fold seed bytes of any length into a 32-byte ChaCha key.
///
/// Each 32-byte chunk is xored into the running key, which is then replaced
/// by the first 32 bytes of ChaCha8 output under that key.
pub fn compress_seed(bytes: &[u8]) -> [u8; 32] {
    let mut key = [0u8; 32];
    for chunk in bytes.chunks(32) {
        for (k, b) in key.iter_mut().zip(chunk) {
            *k ^= b;
        }
        ChaCha8Rng::from_seed(key).fill_bytes(&mut key);
    }
    key
}

/// Explicitly seeded generator used to draw codes.
#[derive(Debug, Clone)]
pub enum CodeRng {
    ChaCha8(ChaCha8Rng),
    XorShift64(XorShift64),
}

impl CodeRng {
    /// Create a generator for `algorithm` seeded with `seed`.
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        match algorithm {
            Algorithm::ChaCha8 => CodeRng::ChaCha8(ChaCha8Rng::seed_from_u64(seed)),
            Algorithm::XorShift64 => CodeRng::XorShift64(XorShift64::seed_from_u64(seed)),
        }
    }

    /// Create a generator from a seed wider than 64 bits, given as
    /// little-endian bytes. The bytes are folded with [`compress_seed`].
    pub fn from_wide_seed(algorithm: Algorithm, bytes: &[u8]) -> Self {
        let key = compress_seed(bytes);
        match algorithm {
            Algorithm::ChaCha8 => CodeRng::ChaCha8(ChaCha8Rng::from_seed(key)),
            Algorithm::XorShift64 => {
                let mut word = [0u8; 8];
                word.copy_from_slice(&key[..8]);
                CodeRng::XorShift64(XorShift64::from_seed(word))
            }
        }
    }

    /// Sample a uniform f64 in [0, 1).
    pub fn sample_f64(&mut self) -> f64 {
        Standard.sample(self)
    }
}

impl RngCore for CodeRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            CodeRng::ChaCha8(rng) => rng.next_u32(),
            CodeRng::XorShift64(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            CodeRng::ChaCha8(rng) => rng.next_u64(),
            CodeRng::XorShift64(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        match self {
            CodeRng::ChaCha8(rng) => rng.fill_bytes(buf),
            CodeRng::XorShift64(rng) => rng.fill_bytes(buf),
        }
    }

    fn try_fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            CodeRng::ChaCha8(rng) => rng.try_fill_bytes(buf),
            CodeRng::XorShift64(rng) => rng.try_fill_bytes(buf),
        }
    }
}
