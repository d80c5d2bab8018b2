pub mod types;
pub mod extractor;
pub mod aggregator;
pub mod assembler;
pub mod pipeline;

pub use types::{
    CalibrationEntry,
    ImageTables,
    OutputTable,
    TuningConfig,
    TuningConfigBuilder,
};
pub use extractor::SingleImageExtractor;
pub use aggregator::TemperatureAggregator;
pub use assembler::OutputAssembler;
pub use pipeline::LscTuningPipeline;
