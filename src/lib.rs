pub mod config;
pub mod coord;
pub mod distance;
pub mod error;
pub mod format;
pub mod planar;
pub mod polyline;
pub mod proj;
pub mod route;
#[cfg(feature = "python")]
mod py;

pub use config::{GeodesyConfig, Units, UTM_K0};
pub use coord::{degrees_to_radians, radians_to_degrees, Coordinate};
pub use distance::{distance, distance_with, quick_distance};
pub use error::{GeoError, PolylineError};
pub use format::{format_distance, format_distance_with};
pub use planar::PlanarPoint;
pub use polyline::{decode_polyline, PolylineDecoder};
pub use proj::datum::{Datum, NAD27_CONUS, WGS84};
pub use proj::ellipsoid::Ellipsoid;
pub use proj::transform::convert_datum;
pub use proj::transverse_mercator::{to_transverse_mercator, TransverseMercator};
pub use proj::PlanarProjection;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "routegeo")]
fn routegeo_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
