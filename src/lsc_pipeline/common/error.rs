use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Degenerate mapping domain: [{0}, {0}] has zero width")]
    DegenerateDomain(f64),

    #[error("Sector grid shape mismatch: expected {expected_w}x{expected_h}, got {got_w}x{got_h}")]
    ShapeMismatch {
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },

    #[error("No calibration input: {0}")]
    EmptyInput(String),

    #[error("Missing channel plane: {0}")]
    MissingChannel(String),

    #[error("Invalid sector geometry: cols={0}, rows={1}")]
    InvalidGeometry(usize, usize),
}

pub type Result<T> = std::result::Result<T, TuningError>;
