//! Transverse Mercator projection: Snyder's power series in A = Δλ·cosφ,
//! through A⁵ for easting and A⁶ for northing.
//!
//! Offsets are relative to an arbitrary centre point rather than a UTM zone
//! origin: the central meridian is the centre's longitude and northing is
//! measured from the centre's latitude. Accurate to millimetres within a few
//! degrees of the central meridian.

use log::debug;

use crate::config::GeodesyConfig;
use crate::coord::Coordinate;
use crate::error::{ensure_finite, GeoError};
use crate::planar::PlanarPoint;
use crate::proj::common::meridian_arc_length;
use crate::proj::datum::Datum;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::PlanarProjection;

pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    center: Coordinate,
    k0: f64,
    // Precomputed
    m0: f64, // meridian arc to the centre latitude
}

impl TransverseMercator {
    pub fn new(center: Coordinate, k0: f64, datum: &Datum) -> Result<Self, GeoError> {
        if !(k0 > 0.0) || !k0.is_finite() {
            return Err(GeoError::InvalidParameter(format!(
                "scale factor must be positive, got {k0}"
            )));
        }
        let ellipsoid = datum.ellipsoid;
        let m0 = meridian_arc_length(center.lat_rad(), ellipsoid.a, ellipsoid.es);
        Ok(Self {
            ellipsoid,
            center,
            k0,
            m0,
        })
    }

    /// Projector around `center` using the configured scale factor.
    pub fn with_config(
        center: Coordinate,
        datum: &Datum,
        config: &GeodesyConfig,
    ) -> Result<Self, GeoError> {
        config.validate()?;
        Self::new(center, config.scale_factor, datum)
    }

    pub fn center(&self) -> &Coordinate {
        &self.center
    }

    pub fn scale_factor(&self) -> f64 {
        self.k0
    }
}

impl PlanarProjection for TransverseMercator {
    fn project(&self, point: &Coordinate) -> Result<PlanarPoint, GeoError> {
        let a = self.ellipsoid.a;
        let es = self.ellipsoid.es;
        let et2 = self.ellipsoid.et2;
        let k0 = self.k0;

        let phi = point.lat_rad();
        let m = meridian_arc_length(phi, a, es);

        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let n = a / (1.0 - es * sin_phi * sin_phi).sqrt(); // prime vertical radius
        let t = tan_phi * tan_phi;
        let c = et2 * cos_phi * cos_phi;
        let big_a = (point.lon_rad() - self.center.lon_rad()) * cos_phi;

        let a2 = big_a * big_a;
        let a3 = a2 * big_a;
        let a4 = a3 * big_a;
        let a5 = a4 * big_a;
        let a6 = a5 * big_a;

        let x = k0
            * n
            * (big_a
                + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * et2) * a5 / 120.0);

        let y = k0
            * (m - self.m0
                + n * tan_phi
                    * (a2 / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * et2) * a6 / 720.0));

        if !(x.is_finite() && y.is_finite()) {
            debug!(
                "transverse mercator: non-finite offset for {point:?} around {:?}",
                self.center
            );
        }
        ensure_finite("to_transverse_mercator", &[x, y])?;
        Ok(PlanarPoint { x, y })
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

/// Project `point` to metres east/north of `center` with scale factor `k0`.
pub fn to_transverse_mercator(
    point: &Coordinate,
    center: &Coordinate,
    k0: f64,
    datum: &Datum,
) -> Result<PlanarPoint, GeoError> {
    TransverseMercator::new(*center, k0, datum)?.project(point)
}
