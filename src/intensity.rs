/// Second pass: desert intensity per cell
///
/// `intensity = clamp(1 - normalized + jitter + spatial, 0, 1)`, higher meaning
/// less coverage. The jitter and spatial terms are fixed trig functions of the
/// cell's own properties; they only break up banding when many cells share a
/// score, so the coefficients stay exactly as they are.

use crate::aggregate::{AggregatePass, CellAggregate};
use crate::constants::{
    JITTER_COUNT_COEFF, JITTER_DIVISOR, JITTER_SCORE_COEFF, SPATIAL_DIVISOR, SPATIAL_LAT_COEFF,
    SPATIAL_LNG_COEFF,
};
use crate::coordinate::Coordinate;
use crate::hex_grid::HexCell;
use rayon::prelude::*;

/// `score / max(max_score, 1)` clamped to [0, 1]
pub fn normalize_score(score: f64, max_score: f64) -> f64 {
    (score / max_score.max(1.0)).clamp(0.0, 1.0)
}

/// In [0, 1/15]
pub fn jitter_term(score: f64, facility_count: usize) -> f64 {
    ((score * JITTER_SCORE_COEFF + facility_count as f64 * JITTER_COUNT_COEFF).sin() + 1.0) / JITTER_DIVISOR
}

/// In [-1/6, 1/6]; y is latitude, x is longitude
pub fn spatial_term(center: Coordinate) -> f64 {
    ((center.lat * SPATIAL_LAT_COEFF).sin() + (center.lng * SPATIAL_LNG_COEFF).cos()) / SPATIAL_DIVISOR
}

pub fn cell_intensity(aggregate: CellAggregate, max_score: f64, center: Coordinate) -> f64 {
    let normalized = normalize_score(aggregate.score, max_score);
    let raw = 1.0 - normalized + jitter_term(aggregate.score, aggregate.facility_count) + spatial_term(center);
    raw.clamp(0.0, 1.0)
}

/// Intensities aligned with `cells`; needs the finished aggregate pass for its max
pub fn normalize_pass(cells: &[HexCell], pass: &AggregatePass) -> Vec<f64> {
    cells
        .par_iter()
        .zip(pass.aggregates.par_iter())
        .map(|(cell, aggregate)| cell_intensity(*aggregate, pass.max_score, cell.center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use more_asserts::{assert_ge, assert_le};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn normalization_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let scores: Vec<f64> = (0..500).map(|_| rng.random_range(0.0..40.0)).collect();
        let max = scores.iter().cloned().fold(0.0, f64::max);
        for s in &scores {
            let n = normalize_score(*s, max);
            assert_ge!(n, 0.0);
            assert_le!(n, 1.0);
        }
        assert_eq!(normalize_score(max, max), 1.0);
    }

    #[test]
    fn small_maxima_are_floored_at_one() {
        assert_abs_diff_eq!(normalize_score(0.5, 0.5), 0.5);
        assert_eq!(normalize_score(0.0, 0.0), 0.0);
    }

    #[test]
    fn term_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let j = jitter_term(rng.random_range(0.0..100.0), rng.random_range(0..200));
            assert_ge!(j, 0.0);
            assert_le!(j, 1.0 / 15.0 + 1e-15);

            let s = spatial_term(Coordinate::new(rng.random_range(-90.0..90.0), rng.random_range(-180.0..180.0)));
            assert_le!(s.abs(), 1.0 / 6.0 + 1e-15);
        }
    }

    #[test]
    fn known_values() {
        // sin(0) = 0 → 1/30
        assert_abs_diff_eq!(jitter_term(0.0, 0), 1.0 / 30.0);
        // sin(0) + cos(0) = 1 → 1/12
        assert_abs_diff_eq!(spatial_term(Coordinate::new(0.0, 0.0)), 1.0 / 12.0);

        let aggregate = CellAggregate {
            score: 2.0,
            facility_count: 1,
        };
        let center = Coordinate::new(6.5, -1.25);
        let expected = 1.0 - 0.5
            + ((2.0 * 7.9 + 1.7_f64).sin() + 1.0) / 30.0
            + ((6.5 * 3.4_f64).sin() + (-1.25 * 2.7_f64).cos()) / 12.0;
        assert_abs_diff_eq!(cell_intensity(aggregate, 4.0, center), expected.clamp(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn intensity_is_clamped() {
        let empty = CellAggregate {
            score: 0.0,
            facility_count: 0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let center = Coordinate::new(rng.random_range(4.0..12.0), rng.random_range(-4.0..2.0));
            let i = cell_intensity(empty, rng.random_range(0.0..20.0), center);
            assert_ge!(i, 0.0);
            assert_le!(i, 1.0);
        }
    }

    #[test]
    fn better_covered_cells_are_less_intense() {
        let center = Coordinate::new(0.0, 0.0);
        let poor = cell_intensity(CellAggregate { score: 0.0, facility_count: 0 }, 10.0, center);
        let rich = cell_intensity(CellAggregate { score: 10.0, facility_count: 4 }, 10.0, center);
        assert!(rich < poor);
    }
}
