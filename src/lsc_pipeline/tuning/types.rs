//! Tuning configuration and output types

use crate::lsc_pipeline::gradient::Remainder;
use crate::lsc_pipeline::grid::SectorGrid;

/// One image's correction grids, still in the ratio domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTables {
    /// Illuminant color temperature in Kelvin
    pub color_temperature: u32,
    /// Red, ratioed against the Gr average grid
    pub r: SectorGrid,
    /// Green on the red row
    pub gr: SectorGrid,
    /// Green on the blue row
    pub gb: SectorGrid,
    /// Blue, ratioed against the Gb average grid
    pub b: SectorGrid,
}

/// One illuminant's fixed-point correction tables, flattened row-major.
/// Each element lies in the target register range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationEntry {
    /// Color temperature in Kelvin
    pub ct: u32,
    pub r: Vec<i32>,
    pub gr: Vec<i32>,
    pub gb: Vec<i32>,
    pub b: Vec<i32>,
}

/// The engine's final artifact: grid metadata plus per-temperature entries
/// sorted ascending by temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Per-column sector extents along x, per the configured remainder policy
    pub x_sizes: Vec<f64>,
    /// Per-row sector extents along y
    pub y_sizes: Vec<f64>,
    pub entries: Vec<CalibrationEntry>,
}

/// Configuration for a tuning run
#[derive(Debug, Clone)]
pub struct TuningConfig {
    /// Correction grid width in sectors
    pub grid_width: usize,
    /// Correction grid height in sectors
    pub grid_height: usize,
    /// Relative sector extent along x, reported as output metadata
    pub x_step: f64,
    /// Relative sector extent along y
    pub y_step: f64,
    /// Remainder policy for the reported sector-size sequences
    pub size_remainder: Remainder,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            grid_width: 8,
            grid_height: 8,
            x_step: 0.5,
            y_step: 0.5,
            size_remainder: Remainder::Float,
        }
    }
}

impl TuningConfig {
    pub fn builder() -> TuningConfigBuilder {
        TuningConfigBuilder::default()
    }
}

/// Builder for TuningConfig
#[derive(Default)]
pub struct TuningConfigBuilder {
    grid_width: Option<usize>,
    grid_height: Option<usize>,
    x_step: Option<f64>,
    y_step: Option<f64>,
    size_remainder: Option<Remainder>,
}

impl TuningConfigBuilder {
    pub fn grid_width(mut self, width: usize) -> Self {
        self.grid_width = Some(width);
        self
    }

    pub fn grid_height(mut self, height: usize) -> Self {
        self.grid_height = Some(height);
        self
    }

    pub fn x_step(mut self, step: f64) -> Self {
        self.x_step = Some(step);
        self
    }

    pub fn y_step(mut self, step: f64) -> Self {
        self.y_step = Some(step);
        self
    }

    pub fn size_remainder(mut self, remainder: Remainder) -> Self {
        self.size_remainder = Some(remainder);
        self
    }

    pub fn build(self) -> TuningConfig {
        let default = TuningConfig::default();
        TuningConfig {
            grid_width: self.grid_width.unwrap_or(default.grid_width),
            grid_height: self.grid_height.unwrap_or(default.grid_height),
            x_step: self.x_step.unwrap_or(default.x_step),
            y_step: self.y_step.unwrap_or(default.y_step),
            size_remainder: self.size_remainder.unwrap_or(default.size_remainder),
        }
    }
}
