//! Per-sector value grids

use crate::lsc_pipeline::common::{Result, TuningError};

/// A row-major grid of per-sector values, one element per sector.
///
/// Grids are value objects: averaging and remapping produce new grids rather
/// than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl SectorGrid {
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TuningError::InvalidGeometry(width, height));
        }
        if values.len() != width * height {
            return Err(TuningError::ShapeMismatch {
                expected_w: width,
                expected_h: height,
                got_w: values.len(),
                got_h: 1,
            });
        }
        Ok(Self { width, height, values })
    }

    /// A grid with every sector set to `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self> {
        Self::new(width, height, vec![value; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Flattens into the row-major element sequence.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn same_shape(&self, other: &SectorGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Mean of all elements.
    pub fn mean_value(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Element-wise arithmetic mean across `grids`.
    ///
    /// A single grid yields itself unchanged; grids of differing shapes are a
    /// fatal mismatch rather than being broadcast.
    pub fn mean(grids: &[&SectorGrid]) -> Result<SectorGrid> {
        let first = grids.first().ok_or_else(|| {
            TuningError::EmptyInput("no grids to average".to_string())
        })?;

        for grid in &grids[1..] {
            if !first.same_shape(grid) {
                return Err(TuningError::ShapeMismatch {
                    expected_w: first.width,
                    expected_h: first.height,
                    got_w: grid.width,
                    got_h: grid.height,
                });
            }
        }

        let count = grids.len() as f64;
        let values = (0..first.values.len())
            .map(|i| grids.iter().map(|g| g.values[i]).sum::<f64>() / count)
            .collect();

        SectorGrid::new(first.width, first.height, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_element_count() {
        let result = SectorGrid::new(2, 2, vec![1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(TuningError::ShapeMismatch { .. })));
    }

    #[test]
    fn new_rejects_zero_geometry() {
        let result = SectorGrid::new(0, 3, vec![]);
        assert!(matches!(result, Err(TuningError::InvalidGeometry(0, 3))));
    }

    #[test]
    fn mean_is_element_wise() {
        let a = SectorGrid::new(2, 1, vec![2.0, 4.0]).unwrap();
        let b = SectorGrid::new(2, 1, vec![4.0, 8.0]).unwrap();
        let c = SectorGrid::new(2, 1, vec![6.0, 12.0]).unwrap();

        let mean = SectorGrid::mean(&[&a, &b, &c]).unwrap();
        assert_eq!(mean.values(), &[4.0, 8.0]);
    }

    #[test]
    fn mean_of_single_grid_is_identity() {
        let a = SectorGrid::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mean = SectorGrid::mean(&[&a]).unwrap();
        assert_eq!(mean, a);
    }

    #[test]
    fn mean_refuses_mismatched_shapes() {
        let a = SectorGrid::new(2, 1, vec![1.0, 2.0]).unwrap();
        let b = SectorGrid::new(1, 2, vec![1.0, 2.0]).unwrap();
        let result = SectorGrid::mean(&[&a, &b]);
        assert!(matches!(result, Err(TuningError::ShapeMismatch { .. })));
    }

    #[test]
    fn mean_of_nothing_is_empty_input() {
        let result = SectorGrid::mean(&[]);
        assert!(matches!(result, Err(TuningError::EmptyInput(_))));
    }
}
