use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, TrainError>;

/// Errors produced while training when inputs are invalid.
#[derive(Debug)]
pub enum TrainError {
    /// An input is invalid for semantic or domain reasons (e.g. an empty dataset).
    InvalidInput(&'static str),

    /// A shape invariant was violated (e.g. mismatched gradient lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "gradient", "dataset row").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// An intermediate value stopped being finite.
    NumericalInstability {
        /// The quantity that blew up.
        what: &'static str,
        /// Its offending value.
        value: f32,
    },

    /// The trace sink could not be written.
    Io(io::Error),
}

impl Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            Self::NumericalInstability { what, value } => {
                write!(f, "numerical instability: {what} is {value}")
            }
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for TrainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TrainError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
