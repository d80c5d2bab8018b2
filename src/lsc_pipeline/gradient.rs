//! Linear distribution and mapping primitive
//!
//! Used in two roles: rescaling correction ratios into the fixed-point
//! register range, and splitting an image axis into a fixed number of sector
//! extents.

use crate::lsc_pipeline::common::{Result, TuningError};
use crate::lsc_pipeline::grid::SectorGrid;

/// Policy for the fractional remainder when distributing an extent into
/// discrete segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Remainder {
    /// Keep segments fractional; every segment is exactly the step.
    #[default]
    Float,
    /// Round each segment to the nearest integer and fold the cumulative
    /// rounding error into the final segment, so the total is exactly
    /// `round(step * count)`.
    Round,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Linear {
    remainder: Remainder,
}

impl Linear {
    pub fn new(remainder: Remainder) -> Self {
        Self { remainder }
    }

    /// Linearly rescales `value` from `domain` to `range`.
    ///
    /// The result is neither rounded nor clamped; callers quantizing to
    /// integers do so explicitly.
    pub fn map(&self, domain: (f64, f64), range: (f64, f64), value: f64) -> Result<f64> {
        let span = domain.1 - domain.0;
        if span == 0.0 {
            return Err(TuningError::DegenerateDomain(domain.0));
        }
        Ok(range.0 + (value - domain.0) * (range.1 - range.0) / span)
    }

    /// Element-wise [`Linear::map`] over a sector grid.
    pub fn map_grid(
        &self,
        domain: (f64, f64),
        range: (f64, f64),
        grid: &SectorGrid,
    ) -> Result<SectorGrid> {
        let values = grid
            .values()
            .iter()
            .map(|&v| self.map(domain, range, v))
            .collect::<Result<Vec<f64>>>()?;
        SectorGrid::new(grid.width(), grid.height(), values)
    }

    /// Splits an extent of `step * count` into `count` consecutive segment
    /// sizes according to the remainder policy.
    pub fn distribute(&self, step: f64, count: usize) -> Vec<f64> {
        match self.remainder {
            Remainder::Float => vec![step; count],
            Remainder::Round => {
                let total = (step * count as f64).round();
                let size = step.round();
                let mut sizes = vec![size; count];
                if let Some(last) = sizes.last_mut() {
                    *last = total - size * (count as f64 - 1.0);
                }
                sizes
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_rescales_linearly() {
        let linear = Linear::default();
        let mapped = linear.map((0.0, 10.0), (100.0, 200.0), 5.0).unwrap();
        assert_eq!(mapped, 150.0);
    }

    #[test]
    fn map_rejects_degenerate_domain() {
        let linear = Linear::default();
        let result = linear.map((2.0, 2.0), (0.0, 1.0), 2.0);
        assert!(matches!(result, Err(TuningError::DegenerateDomain(_))));
    }

    #[test]
    fn map_round_trips() {
        let linear = Linear::default();
        let domain = (1.0, 3.999);
        let range = (1024.0, 4095.0);
        for value in [1.0, 1.7, 2.2, 3.0, 3.999] {
            let there = linear.map(domain, range, value).unwrap();
            let back = linear.map(range, domain, there).unwrap();
            assert!((back - value).abs() < 1e-12);
        }
    }

    #[test]
    fn map_grid_applies_element_wise() {
        let linear = Linear::default();
        let grid = SectorGrid::new(2, 1, vec![0.0, 10.0]).unwrap();
        let mapped = linear.map_grid((0.0, 10.0), (0.0, 1.0), &grid).unwrap();
        assert_eq!(mapped.values(), &[0.0, 1.0]);
    }

    #[test]
    fn distribute_float_keeps_fractional_segments() {
        let linear = Linear::new(Remainder::Float);
        assert_eq!(linear.distribute(0.5, 8), vec![0.5; 8]);
    }

    #[test]
    fn distribute_round_sums_to_rounded_total() {
        let linear = Linear::new(Remainder::Round);
        let sizes = linear.distribute(1.7, 3);
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes.iter().sum::<f64>(), (1.7f64 * 3.0).round());
        for size in &sizes {
            assert_eq!(size.fract(), 0.0);
        }
    }

    #[test]
    fn distribute_round_folds_error_into_last_segment() {
        let linear = Linear::new(Remainder::Round);
        // Leading segments are round(2.3) = 2 each; the last picks up the
        // remainder so the total is round(9.2) = 9.
        assert_eq!(linear.distribute(2.3, 4), vec![2.0, 2.0, 2.0, 3.0]);
    }

    #[test]
    fn distribute_round_keeps_leading_segments_at_rounded_step() {
        let linear = Linear::new(Remainder::Round);
        let sizes = linear.distribute(1.7, 3);
        assert_eq!(&sizes[..2], &[2.0, 2.0]);
        assert_eq!(sizes[2], (1.7f64 * 3.0).round() - 4.0);
    }

    #[test]
    fn distribute_round_is_exact_for_integral_steps() {
        let linear = Linear::new(Remainder::Round);
        assert_eq!(linear.distribute(16.0, 4), vec![16.0; 4]);
    }
}
