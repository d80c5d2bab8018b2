pub mod logger;
pub mod lsc_pipeline;
