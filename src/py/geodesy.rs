//! PyO3 bindings for datum conversion, distances and polyline decoding.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::Units;
use crate::coord::Coordinate;
use crate::proj::datum::Datum;

pub(crate) fn datum_from_name(name: &str) -> PyResult<Datum> {
    Datum::from_name(name).ok_or_else(|| PyValueError::new_err(format!("Unknown datum: {name}")))
}

/// Decode an encoded polyline string.
///
/// Returns:
///     List of (lat, lon) tuples in decimal degrees.
#[pyfunction]
pub fn decode_polyline(encoded: &str) -> PyResult<Vec<(f64, f64)>> {
    let points = crate::polyline::decode_polyline(encoded)?;
    Ok(points.iter().map(|c| (c.lat(), c.lon())).collect())
}

/// Convert a (lat, lon) pair between datums ("WGS84", "NAD27").
#[pyfunction]
#[pyo3(signature = (lat, lon, from_datum, to_datum="WGS84"))]
pub fn convert_datum(lat: f64, lon: f64, from_datum: &str, to_datum: &str) -> PyResult<(f64, f64)> {
    let from = datum_from_name(from_datum)?;
    let to = datum_from_name(to_datum)?;
    let c = crate::proj::transform::convert_datum(Coordinate::try_new(lat, lon)?, &from, &to)?;
    Ok((c.lat(), c.lon()))
}

/// Ellipsoidal (Vincenty) distance in metres between two (lat, lon) pairs.
#[pyfunction]
#[pyo3(signature = (a, b, datum="WGS84"))]
pub fn distance(a: (f64, f64), b: (f64, f64), datum: &str) -> PyResult<f64> {
    let d = datum_from_name(datum)?;
    let a = Coordinate::try_new(a.0, a.1)?;
    let b = Coordinate::try_new(b.0, b.1)?;
    Ok(crate::distance::distance(&a, &b, &d)?)
}

/// Spherical distance in metres between two (lat, lon) pairs.
#[pyfunction]
#[pyo3(signature = (a, b, datum="WGS84"))]
pub fn quick_distance(a: (f64, f64), b: (f64, f64), datum: &str) -> PyResult<f64> {
    let d = datum_from_name(datum)?;
    let a = Coordinate::try_new(a.0, a.1)?;
    let b = Coordinate::try_new(b.0, b.1)?;
    Ok(crate::distance::quick_distance(&a, &b, &d.ellipsoid)?)
}

/// Short display label for a distance in metres, in "metric" or "imperial" units.
#[pyfunction]
#[pyo3(signature = (meters, units="metric"))]
pub fn format_distance(meters: f64, units: &str) -> PyResult<String> {
    let units = Units::from_name(units)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown units: {units}")))?;
    let meters = crate::planar::meters_to_u32(meters)?;
    Ok(crate::format::format_distance(meters, units))
}
