//! An LFSR-driven dreidel spinner.
//!
//! Spins a four-faced dreidel (Nun, Gimel, Hey, Shin) using a maximal-length
//! 32-bit linear feedback shift register as the pseudo-random source. The
//! feedback polynomial x^32 + x^22 + x^2 + x^1 + 1 gives the register a
//! period of 2^32 - 1 over the nonzero states, so every seed yields a long,
//! fully reproducible sequence of spins.
//!
//! # Usage
//!
//! ## Quick start
//!
//! ```rust
//! use dreidel_rs::{Dreidel, Face};
//!
//! let mut dreidel = Dreidel::new(42).unwrap();
//! let face = dreidel.spin();
//! assert!(Face::ALL.contains(&face));
//! ```
//!
//! ## Using the generator directly
//!
//! ```rust
//! use dreidel_rs::Lfsr32;
//!
//! let mut rng = Lfsr32::new(1).unwrap();
//! assert_eq!(rng.step(), 0x8000_0000);
//!
//! let roll = rng.random_int(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! ## Supplying a custom generator
//!
//! [`Dreidel`] accepts anything implementing [`RandomInt`], which makes the
//! spinner testable against fixed or scripted sources:
//!
//! ```rust
//! use dreidel_rs::{Dreidel, Lfsr32};
//!
//! let rng = Lfsr32::new(0xDEAD_BEEF).unwrap();
//! let mut dreidel = Dreidel::with_generator(rng);
//! dreidel.spin();
//! ```
//!
//! The generator is deterministic and statistically fair over long runs, but
//! the modulo range reduction is not exactly uniform and nothing here is
//! suitable for cryptographic use.

mod dreidel;
mod lfsr;

use std::fmt;

pub use dreidel::Dreidel;
pub use lfsr::{DEFAULT_SEED, Lfsr32};

/// Errors reported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfsrError {
    /// A zero seed was supplied. The all-zero state is a fixed point of the
    /// feedback function and would degenerate to a constant zero stream.
    ZeroSeed,
    /// `random_int` was called with `min_val > max_val`.
    EmptyRange,
}

impl fmt::Display for LfsrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LfsrError::ZeroSeed => write!(f, "seed must be nonzero"),
            LfsrError::EmptyRange => write!(f, "min_val must not exceed max_val"),
        }
    }
}

impl std::error::Error for LfsrError {}

/// One face of the dreidel.
///
/// In play the four letters are read as the Yiddish outcomes Nisht
/// (nothing), Gantz (all), Halb (half), and Shtel (put in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Nun,
    Gimel,
    Hey,
    Shin,
}

impl Face {
    /// The four faces, in the fixed order spins index into.
    pub const ALL: [Face; 4] = [Face::Nun, Face::Gimel, Face::Hey, Face::Shin];

    /// The printable face name.
    pub fn label(self) -> &'static str {
        match self {
            Face::Nun => "Nun",
            Face::Gimel => "Gimel",
            Face::Hey => "Hey",
            Face::Shin => "Shin",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Capability contract for range-limited pseudo-random integers.
///
/// For `min_val <= max_val` an implementation must return `Ok(v)` with `v`
/// in `[min_val, max_val]` inclusive; for `min_val > max_val` it must return
/// [`LfsrError::EmptyRange`]. Any implementor can drive a [`Dreidel`].
pub trait RandomInt {
    fn random_int(&mut self, min_val: i64, max_val: i64) -> Result<i64, LfsrError>;
}
