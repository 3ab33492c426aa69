//! Datum conversion by shifting the geocentric position of a point between
//! ellipsoid centres.
//!
//! This is the short, non-iterative method: the point is placed on the source
//! ellipsoid, moved by the difference of the two datum offsets, and its latitude
//! and longitude are read back against the target ellipsoid. Good to a few metres
//! for NAD27/WGS84 in North America; not a Helmert transform.

use log::debug;

use crate::coord::{radians_to_degrees, Coordinate};
use crate::error::{ensure_finite, GeoError};
use crate::proj::datum::Datum;

/// Convert `coord` from `from` to `to`.
///
/// Identical datums return the input unchanged. Latitudes of exactly 0 and ±90
/// degrees and longitudes of exactly ±90 degrees take dedicated branches where the
/// general tangent formulas are ill-conditioned.
pub fn convert_datum(coord: Coordinate, from: &Datum, to: &Datum) -> Result<Coordinate, GeoError> {
    if from == to {
        debug!("convert_datum: identical datums, returning input");
        return Ok(coord);
    }

    let (x, y, z) = geocentric_position(&coord, from);

    let ddx = x - (to.dx - from.dx);
    let ddy = y - (to.dy - from.dy);
    let ddz = z - (to.dz - from.dz);

    let psi1 = (ddz / (ddx * ddx + ddy * ddy).sqrt()).atan();
    let lat = radians_to_degrees((psi1.tan() / (1.0 - to.ellipsoid.es)).atan());
    let mut lon = radians_to_degrees((ddy / ddx).atan());
    if ddx < 0.0 {
        if ddy > 0.0 {
            lon += 180.0;
        } else {
            lon -= 180.0;
        }
    }

    ensure_finite("convert_datum", &[lat, lon])?;
    Ok(Coordinate::new(lat, lon))
}

/// Position of `coord` relative to the centre of the datum's ellipsoid (metres).
fn geocentric_position(coord: &Coordinate, datum: &Datum) -> (f64, f64, f64) {
    let a = datum.ellipsoid.a;
    let b = datum.ellipsoid.b;
    let phi = coord.lat_rad();
    let lambda = coord.lon_rad();

    // geocentric (reduced) latitude
    let psi = if coord.lat() == 0.0 || coord.lat() == 90.0 || coord.lat() == -90.0 {
        phi
    } else {
        ((1.0 - datum.ellipsoid.es) * phi.tan()).atan()
    };

    let t1 = psi.tan();
    let jh = b * b + a * a * t1 * t1;

    let (mut x, mut y) = if coord.lon() == 90.0 || coord.lon() == -90.0 {
        (0.0, ((a * b) / jh.sqrt()).abs())
    } else {
        let t2 = lambda.tan();
        let x = ((a * b) / ((1.0 + t2 * t2) * jh).sqrt()).abs();
        (x, (x * t2).abs())
    };
    if coord.lon() < -90.0 || coord.lon() > 90.0 {
        x = -x;
    }
    if coord.lon() < 0.0 {
        y = -y;
    }

    let z = if coord.lat() == 90.0 {
        b
    } else if coord.lat() == -90.0 {
        -b
    } else {
        t1 * ((a * a * b * b) / jh).sqrt()
    };

    (x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::distance;
    use crate::proj::datum::{NAD27_CONUS, WGS84};
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_short_circuit() {
        let c = Coordinate::new(37.7749, -122.4194);
        let out = convert_datum(c, &WGS84, &WGS84).unwrap();
        assert_eq!(out, c);
        let out = convert_datum(c, &NAD27_CONUS, &NAD27_CONUS).unwrap();
        assert_eq!(out, c);
    }

    #[test]
    fn test_equator_point_on_surface() {
        let (x, y, z) = geocentric_position(&Coordinate::new(0.0, 0.0), &WGS84);
        assert_relative_eq!(x, WGS84.ellipsoid.a, epsilon = 1e-6);
        assert_relative_eq!(y, 0.0);
        assert_relative_eq!(z, 0.0);
    }

    #[test]
    fn test_pole_uses_semi_minor_axis() {
        let (_, _, z) = geocentric_position(&Coordinate::new(90.0, 10.0), &WGS84);
        assert_eq!(z, WGS84.ellipsoid.b);
        let (_, _, z) = geocentric_position(&Coordinate::new(-90.0, 10.0), &WGS84);
        assert_eq!(z, -WGS84.ellipsoid.b);
    }

    #[test]
    fn test_quarter_meridians() {
        let (x, y, _) = geocentric_position(&Coordinate::new(0.0, 90.0), &WGS84);
        assert_eq!(x, 0.0);
        assert_relative_eq!(y, WGS84.ellipsoid.a, epsilon = 1e-6);

        let (x, y, _) = geocentric_position(&Coordinate::new(0.0, -90.0), &WGS84);
        assert_eq!(x, 0.0);
        assert_relative_eq!(y, -WGS84.ellipsoid.a, epsilon = 1e-6);
    }

    #[test]
    fn test_quadrant_signs() {
        let (x, y, _) = geocentric_position(&Coordinate::new(10.0, 135.0), &WGS84);
        assert!(x < 0.0 && y > 0.0);
        let (x, y, _) = geocentric_position(&Coordinate::new(10.0, -135.0), &WGS84);
        assert!(x < 0.0 && y < 0.0);
        let (x, y, _) = geocentric_position(&Coordinate::new(10.0, -45.0), &WGS84);
        assert!(x > 0.0 && y < 0.0);
    }

    #[test]
    fn test_nad27_shift_magnitude() {
        // Shift between NAD27 and WGS84 in the western US is on the order of 100 m.
        let nad27 = Coordinate::new(38.5, -120.2);
        let wgs = convert_datum(nad27, &NAD27_CONUS, &WGS84).unwrap();
        let shift = distance(&nad27, &wgs, &WGS84).unwrap();
        assert!(shift > 20.0 && shift < 300.0, "shift = {shift}");
        // Longitude moves west in California
        assert!(wgs.lon() < nad27.lon());
    }

    #[test]
    fn test_round_trip_within_metres() {
        let start = Coordinate::new(40.7, -74.0);
        let wgs = convert_datum(start, &NAD27_CONUS, &WGS84).unwrap();
        let back = convert_datum(wgs, &WGS84, &NAD27_CONUS).unwrap();
        let err = distance(&start, &back, &NAD27_CONUS).unwrap();
        assert!(err < 5.0, "round trip error {err} m");
    }

    #[test]
    fn test_boundaries_do_not_fail() {
        for &(lat, lon) in &[
            (0.0, 0.0),
            (90.0, 0.0),
            (-90.0, 0.0),
            (45.0, 90.0),
            (45.0, -90.0),
            (0.0, 90.0),
            (-90.0, -90.0),
            (30.0, 180.0),
        ] {
            let out = convert_datum(Coordinate::new(lat, lon), &NAD27_CONUS, &WGS84);
            assert!(out.is_ok(), "({lat}, {lon}) -> {out:?}");
        }
    }

    #[test]
    fn test_western_hemisphere_stays_west() {
        let out = convert_datum(Coordinate::new(-33.0, -150.0), &NAD27_CONUS, &WGS84).unwrap();
        assert_relative_eq!(out.lon(), -150.0, epsilon = 0.01);
        assert_relative_eq!(out.lat(), -33.0, epsilon = 0.01);
    }

    #[test]
    fn test_non_finite_input_is_singular() {
        for bad in [
            Coordinate::new(f64::NAN, -120.0),
            Coordinate::new(38.5, f64::INFINITY),
        ] {
            assert!(matches!(
                convert_datum(bad, &NAD27_CONUS, &WGS84),
                Err(GeoError::NumericalSingularity(_))
            ));
        }
    }
}
