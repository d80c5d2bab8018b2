pub mod types;
pub mod calibrator;
pub mod sector_mean;

pub use types::{BayerChannel, CalibrationImage};
pub use calibrator::ChannelCalibrator;
pub use sector_mean::SectorMeanCalibrator;
