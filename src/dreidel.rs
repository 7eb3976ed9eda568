//! Dreidel spinner.

use crate::lfsr::Lfsr32;
use crate::{Face, LfsrError, RandomInt};

/// A four-faced dreidel backed by a pseudo-random generator.
///
/// The default generator is an owned [`Lfsr32`]; any [`RandomInt`]
/// implementor can be injected in its place.
#[derive(Debug, Clone)]
pub struct Dreidel<R = Lfsr32> {
    generator: R,
}

impl Dreidel<Lfsr32> {
    /// Create a dreidel over an owned generator with the given nonzero seed.
    pub fn new(seed: u32) -> Result<Self, LfsrError> {
        Ok(Dreidel {
            generator: Lfsr32::new(seed)?,
        })
    }
}

impl<R: RandomInt> Dreidel<R> {
    /// Create a dreidel over an externally supplied generator.
    pub fn with_generator(generator: R) -> Self {
        Dreidel { generator }
    }

    /// Spin the dreidel and return the face it lands on.
    ///
    /// # Panics
    ///
    /// Panics if an injected generator violates the [`RandomInt`] contract
    /// by failing on, or leaving, the range `[0, 3]`.
    pub fn spin(&mut self) -> Face {
        let index = self
            .generator
            .random_int(0, 3)
            .expect("0..=3 is a nonempty range");
        Face::ALL[index as usize]
    }
}

impl Default for Dreidel<Lfsr32> {
    fn default() -> Self {
        Dreidel {
            generator: Lfsr32::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_golden_sequence() {
        use Face::*;
        let mut dreidel = Dreidel::new(12345).unwrap();
        let spins: Vec<Face> = (0..16).map(|_| dreidel.spin()).collect();
        // Reference sequence for this seed; any change here is a regression
        assert_eq!(
            spins,
            vec![
                Nun, Hey, Shin, Shin, Gimel, Nun, Nun, Nun, Nun, Nun, Hey, Shin, Gimel, Nun, Nun,
                Nun
            ]
        );
    }

    #[test]
    fn zero_seed_rejected() {
        assert_eq!(Dreidel::new(0).unwrap_err(), LfsrError::ZeroSeed);
    }

    #[test]
    fn injected_generator_drives_faces() {
        struct Fixed(i64);
        impl RandomInt for Fixed {
            fn random_int(&mut self, min_val: i64, max_val: i64) -> Result<i64, LfsrError> {
                if min_val > max_val {
                    return Err(LfsrError::EmptyRange);
                }
                Ok(self.0.clamp(min_val, max_val))
            }
        }
        assert_eq!(Dreidel::with_generator(Fixed(0)).spin(), Face::Nun);
        assert_eq!(Dreidel::with_generator(Fixed(1)).spin(), Face::Gimel);
        assert_eq!(Dreidel::with_generator(Fixed(2)).spin(), Face::Hey);
        assert_eq!(Dreidel::with_generator(Fixed(3)).spin(), Face::Shin);
    }

    #[test]
    fn default_dreidel_uses_default_seed() {
        let mut a = Dreidel::default();
        let mut b = Dreidel::new(crate::DEFAULT_SEED).unwrap();
        for _ in 0..50 {
            assert_eq!(a.spin(), b.spin());
        }
    }
}
