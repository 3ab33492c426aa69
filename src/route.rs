//! Distances along an ordered sequence of route points.

use ndarray::Array1;

use crate::config::GeodesyConfig;
use crate::coord::Coordinate;
use crate::distance::distance_with;
use crate::error::GeoError;
use crate::proj::datum::Datum;

/// Cumulative ellipsoidal distance from the first point to each point, in metres.
///
/// The first entry is always 0. Consecutive duplicates add nothing.
pub fn route_distances(points: &[Coordinate], datum: &Datum) -> Result<Array1<f64>, GeoError> {
    route_distances_with(points, datum, &GeodesyConfig::default())
}

pub fn route_distances_with(
    points: &[Coordinate],
    datum: &Datum,
    config: &GeodesyConfig,
) -> Result<Array1<f64>, GeoError> {
    config.validate()?;
    let mut out = Array1::zeros(points.len());
    let mut total = 0.0;
    for (i, pair) in points.windows(2).enumerate() {
        total += distance_with(&pair[0], &pair[1], datum, config)?;
        out[i + 1] = total;
    }
    Ok(out)
}
