use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Numerical singularity: {0}")]
    NumericalSingularity(String),

    #[error("Vincenty iteration did not converge after {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("Malformed polyline: {0}")]
    Polyline(#[from] PolylineError),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    #[error("encoding ends mid-value at offset {offset}")]
    Truncated { offset: usize },

    #[error("byte {byte:#04x} at offset {offset} is outside the encoding alphabet")]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("value starting before offset {offset} overflows 32 bits")]
    Overflow { offset: usize },
}

/// Reject non-finite results instead of handing NaN/Inf to callers.
pub(crate) fn ensure_finite(op: &str, values: &[f64]) -> Result<(), GeoError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeoError::NumericalSingularity(format!(
            "{op} produced a non-finite result {values:?}"
        )))
    }
}
