//! Calibration capture types

use std::collections::HashMap;

use crate::lsc_pipeline::common::{Result, TuningError};

/// One of the four Bayer color channels of an RGGB sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerChannel {
    /// Red
    R,
    /// Green on the red row
    Gr,
    /// Green on the blue row
    Gb,
    /// Blue
    B,
}

impl BayerChannel {
    pub fn name(&self) -> &'static str {
        match self {
            BayerChannel::R => "R",
            BayerChannel::Gr => "Gr",
            BayerChannel::Gb => "Gb",
            BayerChannel::B => "B",
        }
    }
}

/// One calibration capture, read-only to the tuning engine.
///
/// Channel planes are the already-extracted per-channel pixel arrays, each
/// `plane_width` x `plane_height` samples. Plane extraction from raw frames
/// happens upstream.
#[derive(Debug, Clone)]
pub struct CalibrationImage {
    /// Illuminant color temperature in Kelvin. Grouping key; images must
    /// report identical values to be averaged together.
    pub color_temperature: u32,
    /// Width of each channel plane in pixels
    pub plane_width: usize,
    /// Height of each channel plane in pixels
    pub plane_height: usize,
    /// Correction grid width in sectors
    pub sector_cols: usize,
    /// Correction grid height in sectors
    pub sector_rows: usize,
    channels: HashMap<BayerChannel, Vec<u16>>,
}

impl CalibrationImage {
    pub fn new(
        color_temperature: u32,
        plane_width: usize,
        plane_height: usize,
        sector_cols: usize,
        sector_rows: usize,
        channels: HashMap<BayerChannel, Vec<u16>>,
    ) -> Self {
        Self {
            color_temperature,
            plane_width,
            plane_height,
            sector_cols,
            sector_rows,
            channels,
        }
    }

    /// The pixel plane for `channel`, or `MissingChannel` if the capture
    /// lacks it.
    pub fn channel(&self, channel: BayerChannel) -> Result<&[u16]> {
        self.channels
            .get(&channel)
            .map(Vec::as_slice)
            .ok_or_else(|| TuningError::MissingChannel(channel.name().to_string()))
    }
}
