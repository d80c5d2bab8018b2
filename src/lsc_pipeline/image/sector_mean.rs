use tracing::debug;

use crate::lsc_pipeline::common::{Result, TuningError};
use crate::lsc_pipeline::gradient::{Linear, Remainder};
use crate::lsc_pipeline::grid::SectorGrid;
use crate::lsc_pipeline::image::calibrator::ChannelCalibrator;
use crate::lsc_pipeline::image::types::CalibrationImage;

/// Default channel calibrator: averages black-level-subtracted pixels per
/// sector and ratios each sector against the reference grid, or against the
/// plane-wide mean when no reference is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorMeanCalibrator {
    black_level: u16,
}

impl SectorMeanCalibrator {
    pub fn new(black_level: u16) -> Self {
        Self { black_level }
    }

    /// Per-sector mean of the plane, sectors sized by rounding distribution
    /// along each axis.
    fn sector_averages(
        &self,
        channel: &[u16],
        image: &CalibrationImage,
    ) -> Result<SectorGrid> {
        let cols = image.sector_cols;
        let rows = image.sector_rows;
        if cols == 0 || rows == 0 {
            return Err(TuningError::InvalidGeometry(cols, rows));
        }
        if channel.len() != image.plane_width * image.plane_height {
            return Err(TuningError::ShapeMismatch {
                expected_w: image.plane_width,
                expected_h: image.plane_height,
                got_w: channel.len(),
                got_h: 1,
            });
        }

        let sizing = Linear::new(Remainder::Round);
        let x_sizes = sizing.distribute(image.plane_width as f64 / cols as f64, cols);
        let y_sizes = sizing.distribute(image.plane_height as f64 / rows as f64, rows);
        debug!(?x_sizes, ?y_sizes, "sector extents");

        // A zero-width sector has no pixels to average; refuse rather than
        // let NaN reach the output tables.
        if x_sizes.iter().chain(&y_sizes).any(|&size| size < 1.0) {
            return Err(TuningError::InvalidGeometry(cols, rows));
        }

        let mut means = Vec::with_capacity(cols * rows);
        let mut y0 = 0usize;
        for y_size in &y_sizes {
            let y1 = y0 + *y_size as usize;
            let mut x0 = 0usize;
            for x_size in &x_sizes {
                let x1 = x0 + *x_size as usize;
                let mut sum = 0.0;
                for y in y0..y1 {
                    for x in x0..x1 {
                        let pixel = channel[y * image.plane_width + x];
                        // Clamp to 1 so a dark sector cannot zero the ratio
                        // denominator.
                        sum += pixel.saturating_sub(self.black_level).max(1) as f64;
                    }
                }
                means.push(sum / ((y1 - y0) * (x1 - x0)) as f64);
                x0 = x1;
            }
            y0 = y1;
        }

        SectorGrid::new(cols, rows, means)
    }
}

impl ChannelCalibrator for SectorMeanCalibrator {
    fn compute(
        &self,
        channel: &[u16],
        image: &CalibrationImage,
        reference: Option<&SectorGrid>,
    ) -> Result<(SectorGrid, SectorGrid)> {
        let averages = self.sector_averages(channel, image)?;

        let table = match reference {
            Some(reference) => {
                if !reference.same_shape(&averages) {
                    return Err(TuningError::ShapeMismatch {
                        expected_w: averages.width(),
                        expected_h: averages.height(),
                        got_w: reference.width(),
                        got_h: reference.height(),
                    });
                }
                let values = reference
                    .values()
                    .iter()
                    .zip(averages.values())
                    .map(|(r, a)| r / a)
                    .collect();
                SectorGrid::new(averages.width(), averages.height(), values)?
            }
            None => {
                let plane_mean = averages.mean_value();
                let values = averages.values().iter().map(|a| plane_mean / a).collect();
                SectorGrid::new(averages.width(), averages.height(), values)?
            }
        };

        Ok((table, averages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn image_with_plane(width: usize, height: usize, cols: usize, rows: usize) -> CalibrationImage {
        CalibrationImage::new(5000, width, height, cols, rows, HashMap::new())
    }

    #[test]
    fn flat_plane_gives_unity_ratios() {
        let image = image_with_plane(8, 8, 2, 2);
        let plane = vec![1000u16; 64];
        let calibrator = SectorMeanCalibrator::new(0);

        let (table, averages) = calibrator.compute(&plane, &image, None).unwrap();
        assert_eq!(averages.values(), &[1000.0, 1000.0, 1000.0, 1000.0]);
        for ratio in table.values() {
            assert!((ratio - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn darker_sector_gets_larger_ratio() {
        // Left half at 500, right half at 1000 on a 1x2 sector grid.
        let image = image_with_plane(4, 2, 2, 1);
        let plane = vec![
            500, 500, 1000, 1000,
            500, 500, 1000, 1000,
        ];
        let calibrator = SectorMeanCalibrator::new(0);

        let (table, _) = calibrator.compute(&plane, &image, None).unwrap();
        // Plane mean 750: ratios 1.5 and 0.75.
        assert!((table.values()[0] - 1.5).abs() < 1e-12);
        assert!((table.values()[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn reference_grid_drives_the_ratio() {
        let image = image_with_plane(2, 2, 1, 1);
        let plane = vec![500u16; 4];
        let reference = SectorGrid::new(1, 1, vec![1000.0]).unwrap();
        let calibrator = SectorMeanCalibrator::new(0);

        let (table, _) = calibrator.compute(&plane, &image, Some(&reference)).unwrap();
        assert!((table.values()[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn black_level_is_subtracted_before_ratioing() {
        let image = image_with_plane(2, 2, 1, 1);
        let plane = vec![1064u16; 4];
        let reference = SectorGrid::new(1, 1, vec![2000.0]).unwrap();
        let calibrator = SectorMeanCalibrator::new(64);

        let (table, averages) = calibrator.compute(&plane, &image, Some(&reference)).unwrap();
        assert_eq!(averages.values(), &[1000.0]);
        assert!((table.values()[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn mismatched_reference_shape_is_fatal() {
        let image = image_with_plane(4, 4, 2, 2);
        let plane = vec![1000u16; 16];
        let reference = SectorGrid::new(1, 1, vec![1000.0]).unwrap();
        let calibrator = SectorMeanCalibrator::new(0);

        let result = calibrator.compute(&plane, &image, Some(&reference));
        assert!(matches!(result, Err(TuningError::ShapeMismatch { .. })));
    }

    #[test]
    fn more_sectors_than_pixels_is_fatal() {
        // 4-pixel-wide plane split into 8 columns would produce zero-width
        // sectors and NaN means.
        let image = image_with_plane(4, 8, 8, 2);
        let plane = vec![1000u16; 32];
        let calibrator = SectorMeanCalibrator::new(0);

        let result = calibrator.compute(&plane, &image, None);
        assert!(matches!(result, Err(TuningError::InvalidGeometry(8, 2))));
    }

    #[test]
    fn wrong_plane_length_is_fatal() {
        let image = image_with_plane(4, 4, 2, 2);
        let plane = vec![1000u16; 15];
        let calibrator = SectorMeanCalibrator::new(0);

        let result = calibrator.compute(&plane, &image, None);
        assert!(matches!(result, Err(TuningError::ShapeMismatch { .. })));
    }
}
