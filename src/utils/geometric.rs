use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::utils::Probability;

/// A geometric jumper starts at `0` and repeatedly skips ahead by a number of failures drawn
/// from a geometric distribution. Every position it lands on is a *success* of an independent
/// Bernoulli trial with probability `prob`, which allows sampling `G(n,p)` edges in time
/// proportional to the number of edges rather than `n^2`.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    /// Probability of the geometric distribution
    prob: f64,
    /// Stop before this value is reached
    stop: Option<u64>,
}

impl GeometricJumper {
    /// Creates a new geometric jumper from a probability with no stop value
    pub fn new(prob: f64) -> Self {
        assert!(prob.is_valid_probability());

        Self { prob, stop: None }
    }

    /// Updates the (exclusive) stop value of the jumper
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Creates an iterator of geometric jumps starting at `0`
    pub fn iter<'a, R: Rng>(self, rng: &'a mut R) -> GeometricJumperIter<'a, R> {
        let distr = (self.prob > 0.0)
            .then(|| Geometric::new(self.prob).expect("probability was validated on creation"));

        GeometricJumperIter {
            distr,
            rng,
            stop: self.stop.unwrap_or(u64::MAX),
            cur: 0,
        }
    }
}

/// An iterator over geometric jumps starting at `0` with an optional stop value
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    /// `None` encodes `p = 0`, i.e. no success ever
    distr: Option<Geometric>,
    rng: &'a mut R,
    stop: u64,
    cur: u64,
}

impl<R> Iterator for GeometricJumperIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let distr = self.distr.as_ref()?;
        if self.cur >= self.stop {
            return None;
        }

        let pos = self.cur.saturating_add(distr.sample(self.rng));
        if pos >= self.stop {
            self.cur = self.stop;
            return None;
        }

        self.cur = pos + 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert_eq!(GeometricJumper::new(0.0).stop_at(100).iter(rng).count(), 0);
        assert_eq!(
            GeometricJumper::new(1.0).stop_at(10).iter(rng).collect_vec(),
            (0..10).collect_vec()
        );
    }

    #[test]
    fn strictly_increasing_and_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for p in [0.01, 0.1, 0.5, 0.9] {
            let jumps = GeometricJumper::new(p).stop_at(10_000).iter(rng).collect_vec();
            assert!(jumps.iter().tuple_windows().all(|(a, b)| a < b));
            assert!(jumps.iter().all(|&x| x < 10_000));

            let expected = 10_000.0 * p;
            let count = jumps.len() as f64;
            assert!((count - expected).abs() < 5.0 * expected.sqrt() + 5.0);
        }
    }
}
