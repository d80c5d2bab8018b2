use tracing::debug;

use crate::lsc_pipeline::common::Result;
use crate::lsc_pipeline::image::{BayerChannel, CalibrationImage, ChannelCalibrator};
use crate::lsc_pipeline::tuning::types::ImageTables;

/// Runs the channel calibrator over all four channels of one capture.
///
/// Pure single-image extraction; averaging across captures happens in the
/// aggregator.
pub struct SingleImageExtractor<C: ChannelCalibrator> {
    calibrator: C,
}

impl<C: ChannelCalibrator> SingleImageExtractor<C> {
    pub fn new(calibrator: C) -> Self {
        Self { calibrator }
    }

    /// Computes the four ratio grids for `image`.
    ///
    /// Both greens are calibrated against themselves; red is ratioed against
    /// the Gr average grid and blue against the Gb average grid.
    pub fn extract(&self, image: &CalibrationImage) -> Result<ImageTables> {
        let (gr_table, gr_avg) = self
            .calibrator
            .compute(image.channel(BayerChannel::Gr)?, image, None)?;
        let (gb_table, gb_avg) = self
            .calibrator
            .compute(image.channel(BayerChannel::Gb)?, image, None)?;

        let (r_table, _) =
            self.calibrator
                .compute(image.channel(BayerChannel::R)?, image, Some(&gr_avg))?;
        let (b_table, _) =
            self.calibrator
                .compute(image.channel(BayerChannel::B)?, image, Some(&gb_avg))?;

        debug!(
            color_temperature = image.color_temperature,
            sectors = r_table.values().len(),
            "extracted single-image tables"
        );

        Ok(ImageTables {
            color_temperature: image.color_temperature,
            r: r_table,
            gr: gr_table,
            gb: gb_table,
            b: b_table,
        })
    }
}
