pub mod common;
pub mod datum;
pub mod ellipsoid;
pub mod transform;
pub mod transverse_mercator;

use ndarray::Array2;

use crate::coord::Coordinate;
use crate::error::GeoError;
use crate::planar::PlanarPoint;

/// Projection from geographic coordinates onto a local plane.
pub trait PlanarProjection: Send + Sync {
    /// Forward: coordinate -> (x, y) metres from the projection centre
    fn project(&self, point: &Coordinate) -> Result<PlanarPoint, GeoError>;

    /// Batch forward transform (default: loop).
    fn project_batch(&self, points: &[Coordinate]) -> Result<Vec<PlanarPoint>, GeoError> {
        points.iter().map(|p| self.project(p)).collect()
    }

    /// Batch forward transform into an N×2 array with columns (x, y).
    fn project_array(&self, points: &[Coordinate]) -> Result<Array2<f64>, GeoError> {
        let mut out = Array2::zeros((points.len(), 2));
        for (mut row, p) in out.rows_mut().into_iter().zip(points) {
            let xy = self.project(p)?;
            row[0] = xy.x;
            row[1] = xy.y;
        }
        Ok(out)
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}
