use crate::lsc_pipeline::gradient::Linear;
use crate::lsc_pipeline::tuning::types::{CalibrationEntry, OutputTable, TuningConfig};

/// Orders the aggregated entries and attaches grid metadata. Performs no
/// numeric transformation of the calibration values.
pub struct OutputAssembler;

impl OutputAssembler {
    pub fn assemble(config: &TuningConfig, mut entries: Vec<CalibrationEntry>) -> OutputTable {
        entries.sort_by_key(|entry| entry.ct);

        let sizing = Linear::new(config.size_remainder);

        OutputTable {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            x_sizes: sizing.distribute(config.x_step, config.grid_width),
            y_sizes: sizing.distribute(config.y_step, config.grid_height),
            entries,
        }
    }
}
