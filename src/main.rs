use std::collections::HashMap;

use anyhow::Result;
use tracing::info;

use lsc_tuning_rs::logger;
use lsc_tuning_rs::lsc_pipeline::{
    BayerChannel, CalibrationImage, LscTuningPipeline, TuningConfig,
};

/// Synthesizes a vignetted flat-field plane: brightest in the center,
/// falling off toward the corners.
fn vignetted_plane(width: usize, height: usize, center_level: f64) -> Vec<u16> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let max_r2 = cx * cx + cy * cy;

    let mut plane = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let falloff = 1.0 - 0.6 * (dx * dx + dy * dy) / max_r2;
            plane.push((center_level * falloff) as u16);
        }
    }
    plane
}

fn capture(color_temperature: u32, sectors: usize) -> CalibrationImage {
    let (width, height) = (64, 64);
    let channels = HashMap::from([
        (BayerChannel::Gr, vignetted_plane(width, height, 2000.0)),
        (BayerChannel::Gb, vignetted_plane(width, height, 2000.0)),
        (BayerChannel::R, vignetted_plane(width, height, 1600.0)),
        (BayerChannel::B, vignetted_plane(width, height, 1200.0)),
    ]);
    CalibrationImage::new(color_temperature, width, height, sectors, sectors, channels)
}

fn main() -> Result<()> {
    logger::init();

    info!("Starting lsc_tuning demo run...");

    let config = TuningConfig::builder().grid_width(8).grid_height(8).build();
    let pipeline = LscTuningPipeline::new(config);

    info!("LSC tuning pipeline initialized");
    info!(
        "Grid: {}x{} sectors",
        pipeline.config().grid_width,
        pipeline.config().grid_height
    );

    // Two captures at 4000 K (averaged together) and one at 6500 K.
    let images = vec![capture(4000, 8), capture(4000, 8), capture(6500, 8)];

    let output = pipeline.process(&images)?;
    for entry in &output.entries {
        info!(
            "ct={} K: r[0]={} gr[0]={} gb[0]={} b[0]={}",
            entry.ct, entry.r[0], entry.gr[0], entry.gb[0], entry.b[0]
        );
    }

    Ok(())
}
