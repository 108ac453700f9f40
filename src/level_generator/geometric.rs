//! Geometric level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`Geometric`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum GeometricError {
    /// The maximum number of levels must be non-zero.
    #[error("max must be non-zero.")]
    ZeroMax,
    /// The probability `$p$` must be in the range `$(0, 1)$`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
}

/// A level generator using a geometric distribution.
///
/// This distribution assumes that if a node is present at some level `$n$`,
/// then the probability that it is also present at level `$n + 1$` is some
/// constant `$p \in (0, 1)$`, so that `$P(\text{level} \geq n) = p^n$`. The
/// distribution is truncated at the maximum number of levels allowed.
#[derive(Debug)]
pub struct Geometric {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// Natural logarithm of the promotion probability `$p$`, precomputed as
    /// every sample divides by it.
    ln_p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Geometric {
    /// Create a new geometric level generator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level.
    ///
    /// The generator is seeded from the operating system; use
    /// [`with_seed`][Geometric::with_seed] for reproducible sequences.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be greater or
    /// equal to 1.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, GeometricError> {
        Self::with_rng(total, p, SmallRng::from_os_rng())
    }

    /// Create a new geometric level generator whose random number generator
    /// is seeded from `seed`.
    ///
    /// Two generators built from the same seed produce the same sequence of
    /// levels, which in turn makes the structure of a list reproducible.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be greater or
    /// equal to 1.
    #[inline]
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, GeometricError> {
        Self::with_rng(total, p, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(total: usize, p: f64, rng: SmallRng) -> Result<Self, GeometricError> {
        if total == 0 {
            return Err(GeometricError::ZeroMax);
        }
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        #[expect(clippy::float_arithmetic, reason = "Precomputing ln(p) is fine")]
        Ok(Geometric {
            total,
            ln_p: p.ln(),
            rng,
        })
    }
}

impl LevelGenerator for Geometric {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    /// Generate a level for a new node.
    ///
    /// A uniform variate `$u \in [0, 1)$` is reflected onto `$r \in (0, 1]$`
    /// so that its logarithm stays finite, and the level is
    ///
    /// ```math
    /// n = \operatorname{round}\left(\log_p r\right)
    /// ```
    ///
    /// truncated to the maximum level allowed.
    #[inline]
    #[expect(clippy::float_arithmetic, reason = "Inverting the geometric CDF")]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::as_conversions,
        reason = "The saturating float-to-int cast doubles as the defensive \
                  clamp: NaN maps to 0 and +inf to usize::MAX, which `min` \
                  then truncates into range."
    )]
    fn level(&mut self) -> usize {
        let r = 1.0 - self.rng.random::<f64>();
        ((r.ln() / self.ln_p).round() as usize).min(self.total - 1)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Geometric, GeometricError};
    use crate::level_generator::LevelGenerator;

    #[test]
    fn invalid_max() {
        assert_eq!(Geometric::new(0, 0.5).err(), Some(GeometricError::ZeroMax));
    }

    #[test]
    fn invalid_p() {
        assert_eq!(
            Geometric::new(1, 0.0).err(),
            Some(GeometricError::InvalidProbability)
        );
        assert_eq!(
            Geometric::new(1, 1.0).err(),
            Some(GeometricError::InvalidProbability)
        );
    }

    #[rstest]
    fn in_range(
        #[values(1, 2, 8, 32)] n: usize,
        #[values(0.01, 0.1, 0.5, 0.99)] p: f64,
    ) -> Result<()> {
        let mut generator = Geometric::new(n, p)?;
        assert_eq!(generator.total(), n);
        for _ in 0..100_000 {
            let level = generator.level();
            assert!((0..n).contains(&level));
        }
        Ok(())
    }

    #[rstest]
    fn reaches_extremes(#[values(2, 4, 8)] n: usize) -> Result<()> {
        let mut generator = Geometric::with_seed(n, 0.5, 0xDECAF)?;
        let mut lowest = false;
        let mut highest = false;
        for _ in 0..100_000 {
            match generator.level() {
                0 => lowest = true,
                level if level == n - 1 => highest = true,
                _ => {}
            }
            if lowest && highest {
                return Ok(());
            }
        }
        bail!("Failed to generate both a level-0 node and a level-{} node.", n - 1);
    }

    #[test]
    fn single_level_always_zero() -> Result<()> {
        let mut generator = Geometric::with_seed(1, 0.5, 7)?;
        for _ in 0..10_000 {
            assert_eq!(generator.level(), 0);
        }
        Ok(())
    }

    /// With `p = 0.5` and rounding, a node stays at level 0 whenever the
    /// uniform variate exceeds `$\sqrt{1/2} \approx 0.707$`.
    #[test]
    fn distribution_sanity() -> Result<()> {
        let samples = 100_000_u32;
        let mut generator = Geometric::with_seed(32, 0.5, 42)?;
        let zeros = (0..samples).filter(|_| generator.level() == 0).count();
        #[expect(
            clippy::float_arithmetic,
            clippy::cast_precision_loss,
            clippy::as_conversions,
            reason = "Statistical tolerance check"
        )]
        let fraction = zeros as f64 / f64::from(samples);
        assert!(
            (0.27..0.32).contains(&fraction),
            "unexpected level-0 fraction: {fraction}"
        );
        Ok(())
    }

    #[test]
    fn seeded_sequences_repeat() -> Result<()> {
        let mut a = Geometric::with_seed(32, 0.5, 99)?;
        let mut b = Geometric::with_seed(32, 0.5, 99)?;
        for _ in 0..10_000 {
            assert_eq!(a.level(), b.level());
        }
        Ok(())
    }
}
