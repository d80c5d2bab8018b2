use std::collections::BTreeMap;

use tracing::info;

use crate::lsc_pipeline::common::{Result, TuningError};
use crate::lsc_pipeline::gradient::Linear;
use crate::lsc_pipeline::grid::SectorGrid;
use crate::lsc_pipeline::tuning::types::{CalibrationEntry, ImageTables};

/// Ratio domain the per-sector correction values live in before encoding.
pub const RATIO_DOMAIN: (f64, f64) = (1.0, 3.999);
/// Fixed-point range of the lens-shading-correction registers.
pub const REGISTER_RANGE: (f64, f64) = (1024.0, 4095.0);

/// Groups per-image tables by illuminant temperature, averages redundant
/// captures, and quantizes into the register range.
pub struct TemperatureAggregator;

impl TemperatureAggregator {
    /// Produces one entry per distinct color temperature, in ascending
    /// temperature order. Input order is insignificant.
    ///
    /// Averaging happens in the ratio domain before quantization so repeated
    /// captures of one illuminant do not compound rounding error.
    pub fn aggregate(tables: &[ImageTables]) -> Result<Vec<CalibrationEntry>> {
        if tables.is_empty() {
            return Err(TuningError::EmptyInput(
                "no calibration images supplied".to_string(),
            ));
        }

        let mut buckets: BTreeMap<u32, Vec<&ImageTables>> = BTreeMap::new();
        for table in tables {
            buckets.entry(table.color_temperature).or_default().push(table);
        }

        let mut entries = Vec::with_capacity(buckets.len());
        for (ct, bucket) in buckets {
            info!(
                color_temperature = ct,
                captures = bucket.len(),
                "averaging temperature bucket"
            );

            let entry = CalibrationEntry {
                ct,
                r: Self::quantize_channel(bucket.iter().map(|t| &t.r))?,
                gr: Self::quantize_channel(bucket.iter().map(|t| &t.gr))?,
                gb: Self::quantize_channel(bucket.iter().map(|t| &t.gb))?,
                b: Self::quantize_channel(bucket.iter().map(|t| &t.b))?,
            };
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Element-wise mean over one channel's grids, remapped from the ratio
    /// domain into the register range and rounded to the nearest integer.
    fn quantize_channel<'a, I>(grids: I) -> Result<Vec<i32>>
    where
        I: Iterator<Item = &'a SectorGrid>,
    {
        let grids: Vec<&SectorGrid> = grids.collect();
        let averaged = SectorGrid::mean(&grids)?;
        let mapped = Linear::default().map_grid(RATIO_DOMAIN, REGISTER_RANGE, &averaged)?;
        Ok(mapped
            .into_values()
            .into_iter()
            .map(|v| v.round() as i32)
            .collect())
    }
}
