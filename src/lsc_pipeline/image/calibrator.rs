use crate::lsc_pipeline::common::Result;
use crate::lsc_pipeline::grid::SectorGrid;
use crate::lsc_pipeline::image::types::CalibrationImage;

/// Sensor-specific single-channel calibration backend.
pub trait ChannelCalibrator {
    /// Computes one channel's per-sector correction ratios for one capture.
    ///
    /// Returns the correction grid plus the channel's own per-sector average
    /// grid. With `reference` absent, ratios are taken against the channel
    /// itself and the average grid is meant to serve as the reference for a
    /// dependent channel; with `reference` present, ratios are taken against
    /// it sector by sector.
    fn compute(
        &self,
        channel: &[u16],
        image: &CalibrationImage,
        reference: Option<&SectorGrid>,
    ) -> Result<(SectorGrid, SectorGrid)>;
}
