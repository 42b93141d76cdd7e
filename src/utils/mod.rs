/*!
# Utilities

Helper traits and structs that do not belong to a specific graph representation or algorithm,
most notably the [`GeometricJumper`](self::geometric::GeometricJumper) powering the
[`G(n,p)`](crate::gens::Gnp) generator.
*/

use num::{One, Zero};

pub mod geometric;

pub use geometric::GeometricJumper;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
