//! Lens-shading-correction tuning pipeline
//!
//! This module computes per-sector vignetting correction tables from a set of
//! calibration captures, with separate modules for the linear
//! distribution/mapping primitive, per-channel calibration, temperature
//! aggregation, and output assembly.

pub mod common;
pub mod gradient;
pub mod grid;
pub mod image;
pub mod tuning;

pub use common::{
    TuningError,
    Result,
};

pub use gradient::{
    Linear,
    Remainder,
};

pub use grid::SectorGrid;

pub use image::{
    BayerChannel,
    CalibrationImage,
    ChannelCalibrator,
    SectorMeanCalibrator,
};

pub use tuning::{
    CalibrationEntry,
    ImageTables,
    LscTuningPipeline,
    OutputAssembler,
    OutputTable,
    SingleImageExtractor,
    TemperatureAggregator,
    TuningConfig,
    TuningConfigBuilder,
};
