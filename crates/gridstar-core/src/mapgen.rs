//! Random obstacle layouts.
//!
//! Positions are drawn uniformly from the grid bounds with rejection
//! sampling: a draw that hits an already chosen or reserved position is
//! discarded and redrawn.

use std::collections::HashSet;

use rand::Rng;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Samples distinct obstacle positions inside a rectangle.
pub struct ObstacleSampler {
    bounds: Range,
    keep_clear: HashSet<Point>,
}

impl ObstacleSampler {
    /// A sampler over `bounds` that never yields a position in
    /// `keep_clear`. Reserved positions outside `bounds` are ignored.
    pub fn new(bounds: Range, keep_clear: &[Point]) -> Self {
        let keep_clear = keep_clear
            .iter()
            .copied()
            .filter(|&p| bounds.contains(p))
            .collect();
        Self {
            bounds,
            keep_clear,
        }
    }

    /// How many positions can be blocked while leaving at least one free
    /// cell. Requests of this size or larger are rejected.
    pub fn available(&self) -> usize {
        self.bounds.len() - self.keep_clear.len()
    }

    /// Draw `count` distinct positions, in draw order.
    ///
    /// Fails with [`GridError::InvalidObstacleCount`] when
    /// `count >= available()`, so the rejection loop always terminates.
    pub fn sample<R: Rng>(&self, count: usize, rng: &mut R) -> Result<Vec<Point>, GridError> {
        let available = self.available();
        if count >= available {
            return Err(GridError::InvalidObstacleCount {
                requested: count,
                available,
            });
        }

        let mut seen: HashSet<Point> = HashSet::with_capacity(count);
        let mut out = Vec::with_capacity(count);
        let mut rejected = 0usize;
        while out.len() < count {
            let p = Point::new(
                rng.random_range(self.bounds.min.x..self.bounds.max.x),
                rng.random_range(self.bounds.min.y..self.bounds.max.y),
            );
            if self.keep_clear.contains(&p) || !seen.insert(p) {
                rejected += 1;
                continue;
            }
            out.push(p);
        }
        log::trace!("sampled {count} obstacles in {} ({rejected} rejected draws)", self.bounds);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_yields_distinct_in_bounds_positions() {
        let bounds = Range::new(0, 0, 6, 4);
        let sampler = ObstacleSampler::new(bounds, &[]);
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 5, 23] {
            let pts = sampler.sample(count, &mut rng).unwrap();
            assert_eq!(pts.len(), count);
            let unique: HashSet<_> = pts.iter().copied().collect();
            assert_eq!(unique.len(), count);
            assert!(pts.iter().all(|&p| bounds.contains(p)));
        }
    }

    #[test]
    fn sample_rejects_full_grid() {
        let sampler = ObstacleSampler::new(Range::new(0, 0, 2, 2), &[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            sampler.sample(4, &mut rng),
            Err(GridError::InvalidObstacleCount {
                requested: 4,
                available: 4
            })
        );
    }

    #[test]
    fn keep_clear_positions_are_never_drawn() {
        let bounds = Range::new(0, 0, 3, 3);
        let reserved = [Point::new(0, 0), Point::new(2, 2), Point::new(9, 9)];
        let sampler = ObstacleSampler::new(bounds, &reserved);
        // The out-of-bounds reservation does not count against capacity.
        assert_eq!(sampler.available(), 7);

        let mut rng = StdRng::seed_from_u64(42);
        let pts = sampler.sample(6, &mut rng).unwrap();
        assert!(!pts.contains(&Point::new(0, 0)));
        assert!(!pts.contains(&Point::new(2, 2)));
        assert!(sampler.sample(7, &mut rng).is_err());
    }
}
