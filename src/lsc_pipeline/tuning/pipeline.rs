use tracing::{info, instrument};

use crate::lsc_pipeline::common::{Result, TuningError};
use crate::lsc_pipeline::image::{CalibrationImage, ChannelCalibrator, SectorMeanCalibrator};
use crate::lsc_pipeline::tuning::aggregator::TemperatureAggregator;
use crate::lsc_pipeline::tuning::assembler::OutputAssembler;
use crate::lsc_pipeline::tuning::extractor::SingleImageExtractor;
use crate::lsc_pipeline::tuning::types::{ImageTables, OutputTable, TuningConfig};

pub struct LscTuningPipeline<C: ChannelCalibrator> {
    extractor: SingleImageExtractor<C>,
    config: TuningConfig,
}

impl LscTuningPipeline<SectorMeanCalibrator> {
    pub fn new(config: TuningConfig) -> Self {
        Self {
            extractor: SingleImageExtractor::new(SectorMeanCalibrator::default()),
            config,
        }
    }
}

impl<C: ChannelCalibrator> LscTuningPipeline<C> {
    pub fn with_calibrator(calibrator: C, config: TuningConfig) -> Self {
        Self {
            extractor: SingleImageExtractor::new(calibrator),
            config,
        }
    }

    fn validate_geometry(&self, image: &CalibrationImage) -> Result<()> {
        if image.sector_cols != self.config.grid_width
            || image.sector_rows != self.config.grid_height
        {
            return Err(TuningError::ShapeMismatch {
                expected_w: self.config.grid_width,
                expected_h: self.config.grid_height,
                got_w: image.sector_cols,
                got_h: image.sector_rows,
            });
        }
        Ok(())
    }

    /// Runs the full tuning flow: per-image extraction, temperature
    /// aggregation, and output assembly.
    #[instrument(skip(self, images), fields(image_count = images.len()))]
    pub fn process(&self, images: &[CalibrationImage]) -> Result<OutputTable> {
        info!("Starting lens-shading tuning");

        if images.is_empty() {
            return Err(TuningError::EmptyInput(
                "no calibration images supplied".to_string(),
            ));
        }

        let tables = {
            let _span = tracing::info_span!("extract_images").entered();
            images
                .iter()
                .map(|image| {
                    self.validate_geometry(image)?;
                    self.extractor.extract(image)
                })
                .collect::<Result<Vec<ImageTables>>>()?
        };

        let entries = {
            let _span = tracing::info_span!("aggregate_temperatures").entered();
            TemperatureAggregator::aggregate(&tables)?
        };

        let table = {
            let _span = tracing::info_span!("assemble_output").entered();
            OutputAssembler::assemble(&self.config, entries)
        };

        info!(
            entries = table.entries.len(),
            grid_width = table.grid_width,
            grid_height = table.grid_height,
            "Tuning complete"
        );
        Ok(table)
    }

    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TuningConfig) {
        self.config = config;
    }
}
