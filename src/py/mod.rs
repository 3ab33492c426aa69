use pyo3::exceptions::{PyArithmeticError, PyValueError};
use pyo3::prelude::*;

use crate::error::{GeoError, PolylineError};

mod geodesy;
mod project;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(geodesy::decode_polyline, m)?)?;
    m.add_function(wrap_pyfunction!(geodesy::convert_datum, m)?)?;
    m.add_function(wrap_pyfunction!(geodesy::distance, m)?)?;
    m.add_function(wrap_pyfunction!(geodesy::quick_distance, m)?)?;
    m.add_function(wrap_pyfunction!(geodesy::format_distance, m)?)?;
    m.add_function(wrap_pyfunction!(project::to_transverse_mercator, m)?)?;
    m.add_function(wrap_pyfunction!(project::project_points, m)?)?;
    Ok(())
}

impl From<GeoError> for PyErr {
    fn from(err: GeoError) -> Self {
        match err {
            GeoError::NumericalSingularity(_) | GeoError::NonConvergence { .. } => {
                PyArithmeticError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

impl From<PolylineError> for PyErr {
    fn from(err: PolylineError) -> Self {
        GeoError::from(err).into()
    }
}
