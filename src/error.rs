use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, PaError>;

/// The crate's error type.
///
/// Broken contracts inside an update, such as a diff strategy registering an index outside of
/// the weight vector, are not represented here: they panic where they are detected.
#[derive(Debug)]
pub enum PaError {
    InvalidHyperparameter {
        param: &'static str,
        value: f32,
        constraint: &'static str,
    },
    InvalidInstanceWeight(f32),
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    Config(serde_json::Error),
}

impl Display for PaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => write!(f, "invalid value {value} for {param}: {constraint}"),
            PaError::InvalidInstanceWeight(weight) => write!(
                f,
                "invalid instance weight {weight}: must be finite and non negative"
            ),
            PaError::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            PaError::Config(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl Error for PaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PaError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}
