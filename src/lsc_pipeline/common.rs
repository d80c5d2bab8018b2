pub mod error;

pub use error::{TuningError, Result};
