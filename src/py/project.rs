//! PyO3 bindings for Transverse Mercator projection.

use numpy::{PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::geodesy::datum_from_name;
use crate::config::UTM_K0;
use crate::coord::Coordinate;
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::PlanarProjection;

/// Project one (lat, lon) pair to metres east/north of `center`.
#[pyfunction]
#[pyo3(signature = (point, center, k0=UTM_K0, datum="WGS84"))]
pub fn to_transverse_mercator(
    point: (f64, f64),
    center: (f64, f64),
    k0: f64,
    datum: &str,
) -> PyResult<(f64, f64)> {
    let d = datum_from_name(datum)?;
    let p = crate::proj::transverse_mercator::to_transverse_mercator(
        &Coordinate::try_new(point.0, point.1)?,
        &Coordinate::try_new(center.0, center.1)?,
        k0,
        &d,
    )?;
    Ok((p.x, p.y))
}

/// Project arrays of latitudes and longitudes around a centre point.
///
/// Args:
///     lat: 1D array of latitudes (degrees).
///     lon: 1D array of longitudes (degrees).
///     center: (lat, lon) of the projection centre.
///     k0: Scale factor on the central meridian.
///     datum: Datum name ("WGS84" or "NAD27").
///
/// Returns:
///     (N, 2) array of (x, y) metres.
#[pyfunction]
#[pyo3(signature = (lat, lon, center, k0=UTM_K0, datum="WGS84"))]
pub fn project_points<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lon: PyReadonlyArray1<'py, f64>,
    center: (f64, f64),
    k0: f64,
    datum: &str,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let lat_view = lat.as_array();
    let lon_view = lon.as_array();
    if lat_view.len() != lon_view.len() {
        return Err(PyValueError::new_err(format!(
            "lat and lon must have same length, got {} and {}",
            lat_view.len(),
            lon_view.len()
        )));
    }

    let points = lat_view
        .iter()
        .zip(lon_view.iter())
        .map(|(&la, &lo)| Coordinate::try_new(la, lo))
        .collect::<Result<Vec<_>, _>>()?;
    let d = datum_from_name(datum)?;
    let center = Coordinate::try_new(center.0, center.1)?;

    let out = py.allow_threads(move || {
        TransverseMercator::new(center, k0, &d)?.project_array(&points)
    })?;

    Ok(PyArray2::from_owned_array(py, out))
}
