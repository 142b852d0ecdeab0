//! Point sampling: uniform initialization and neighbor perturbation.

use super::bounds::Bounds;
use rand::Rng;

/// Draws a point uniformly from the domain, one independent draw per
/// dimension.
///
/// Every strategy uses this to produce its starting point. Sampling is
/// inclusive of both edges, so zero-width bounds are legal.
pub fn sample_uniform<R: Rng>(bounds: &Bounds, rng: &mut R) -> Vec<f64> {
    bounds
        .iter()
        .map(|b| rng.random_range(b.low..=b.high))
        .collect()
}

/// Perturbs `point` into a random neighbor within bounds.
///
/// Per dimension, a delta is drawn uniformly from
/// `[-step_size, step_size]`, scaled by that dimension's range, added to the
/// coordinate, and the result is clamped back into the bound (saturating,
/// not reflecting). `step_size` is a fraction of the per-dimension range
/// rather than an absolute distance, so the neighbor spread is
/// scale-invariant across dimensions with different widths.
///
/// Inputs are assumed well-formed: `point.len() == bounds.len()` and
/// `step_size > 0`. Mismatched lengths truncate to the shorter of the two.
pub fn random_neighbor<R: Rng>(
    point: &[f64],
    bounds: &Bounds,
    step_size: f64,
    rng: &mut R,
) -> Vec<f64> {
    point
        .iter()
        .zip(bounds.iter())
        .map(|(&x, b)| {
            let delta = rng.random_range(-step_size..=step_size) * b.range();
            b.clamp(x + delta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bound;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_uniform_within_bounds() {
        let bounds = Bounds::from_pairs(&[(-5.0, 5.0), (0.0, 1.0), (100.0, 200.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let point = sample_uniform(&bounds, &mut rng);
            assert!(bounds.contains(&point), "sampled {point:?} out of bounds");
        }
    }

    #[test]
    fn test_sample_uniform_zero_width_bound() {
        let bounds = Bounds::from_pairs(&[(3.0, 3.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample_uniform(&bounds, &mut rng), vec![3.0]);
    }

    #[test]
    fn test_sample_uniform_empty_domain() {
        let bounds = Bounds::new(vec![]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(sample_uniform(&bounds, &mut rng).is_empty());
    }

    #[test]
    fn test_random_neighbor_stays_in_bounds_at_edge() {
        // A point on the upper edge can only be pushed out; the clamp must
        // saturate it back onto the edge.
        let bounds = Bounds::from_pairs(&[(-5.0, 5.0), (-5.0, 5.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let neighbor = random_neighbor(&[5.0, -5.0], &bounds, 0.5, &mut rng);
            assert!(bounds.contains(&neighbor));
        }
    }

    #[test]
    fn test_random_neighbor_spread_scales_with_range() {
        // step_size is a fraction of the range: a dimension 100x wider gets
        // deltas 100x larger.
        let bounds = Bounds::from_pairs(&[(-1.0, 1.0), (-100.0, 100.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut max_delta = [0.0f64; 2];
        for _ in 0..1000 {
            let neighbor = random_neighbor(&[0.0, 0.0], &bounds, 0.1, &mut rng);
            max_delta[0] = max_delta[0].max(neighbor[0].abs());
            max_delta[1] = max_delta[1].max(neighbor[1].abs());
        }
        // Deltas are bounded by step_size * range: 0.2 and 20.0.
        assert!(max_delta[0] <= 0.2);
        assert!(max_delta[1] <= 20.0);
        assert!(max_delta[1] > 2.0, "wide dimension barely moved: {max_delta:?}");
    }

    #[test]
    fn test_random_neighbor_truncates_on_length_mismatch() {
        let bounds = Bounds::from_pairs(&[(-5.0, 5.0)]);
        let mut rng = StdRng::seed_from_u64(42);
        let neighbor = random_neighbor(&[0.0, 0.0, 0.0], &bounds, 0.1, &mut rng);
        assert_eq!(neighbor.len(), 1);
    }

    fn arb_bounds() -> impl Strategy<Value = Bounds> {
        prop::collection::vec((-1e3..1e3f64, 0.0..1e3f64), 1..8).prop_map(|dims| {
            Bounds::new(
                dims.into_iter()
                    .map(|(low, width)| Bound::new(low, low + width))
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_sample_uniform_in_bounds(bounds in arb_bounds(), seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let point = sample_uniform(&bounds, &mut rng);
            prop_assert!(bounds.contains(&point));
        }

        #[test]
        fn prop_random_neighbor_in_bounds(
            bounds in arb_bounds(),
            seed: u64,
            step_size in 1e-3..2.0f64,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let point = sample_uniform(&bounds, &mut rng);
            let neighbor = random_neighbor(&point, &bounds, step_size, &mut rng);
            prop_assert!(bounds.contains(&neighbor));
        }

        #[test]
        fn prop_neighbor_chain_stays_in_bounds(bounds in arb_bounds(), seed: u64) {
            // Repeated perturbation never drifts out of the domain.
            let mut rng = StdRng::seed_from_u64(seed);
            let mut point = sample_uniform(&bounds, &mut rng);
            for _ in 0..50 {
                point = random_neighbor(&point, &bounds, 0.1, &mut rng);
                prop_assert!(bounds.contains(&point));
            }
        }
    }
}
