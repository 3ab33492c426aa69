//! Planar offsets produced by the projector, and the 32-bit integer forms that
//! route files store them in.
//!
//! Route files hold projected offsets and distances as truncated 32-bit integers
//! and angles as fixed-point degrees scaled by `(2^31 - 1) / 180`. The projector
//! itself keeps full `f64` precision; the conversions here are where values are
//! checked against those limits.

use std::f64::consts::PI;

use crate::error::GeoError;

const FIXED_POINT_ONE_EIGHTY: f64 = i32::MAX as f64;

/// Offset in metres east (`x`) and north (`y`) of a projection centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Truncate toward zero into the `i32` pair stored in route files.
    pub fn truncate(&self) -> Result<(i32, i32), GeoError> {
        Ok((truncate_i32("x", self.x)?, truncate_i32("y", self.y)?))
    }

    /// Squared distance between the truncated positions, in square metres.
    pub fn distance_squared(&self, other: &PlanarPoint) -> Result<i64, GeoError> {
        let (x1, y1) = self.truncate()?;
        let (x2, y2) = other.truncate()?;
        let dx = i64::from(x1) - i64::from(x2);
        let dy = i64::from(y1) - i64::from(y2);
        Ok(dx * dx + dy * dy)
    }
}

impl From<(f64, f64)> for PlanarPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

fn truncate_i32(name: &str, value: f64) -> Result<i32, GeoError> {
    let t = value.trunc();
    if !t.is_finite() || t < i32::MIN as f64 || t > i32::MAX as f64 {
        return Err(GeoError::OutOfRange(format!(
            "{name} = {value} does not fit in a 32-bit integer"
        )));
    }
    Ok(t as i32)
}

/// Truncate a distance in metres into the unsigned 32-bit distance field.
pub fn meters_to_u32(meters: f64) -> Result<u32, GeoError> {
    let t = meters.trunc();
    if !t.is_finite() || t < 0.0 || t > u32::MAX as f64 {
        return Err(GeoError::OutOfRange(format!(
            "distance {meters} m does not fit in an unsigned 32-bit integer"
        )));
    }
    Ok(t as u32)
}

/// Degrees as a fixed-point integer where ±180° maps to ±(2^31 - 1).
pub fn degrees_to_fixed(deg: f64) -> Result<i32, GeoError> {
    if !deg.is_finite() || !(-180.0..=180.0).contains(&deg) {
        return Err(GeoError::OutOfRange(format!(
            "{deg} degrees is outside [-180, 180]"
        )));
    }
    Ok((deg * FIXED_POINT_ONE_EIGHTY / 180.0).trunc() as i32)
}

pub fn fixed_to_degrees(value: i32) -> f64 {
    f64::from(value) * 180.0 / FIXED_POINT_ONE_EIGHTY
}

pub fn fixed_to_radians(value: i32) -> f64 {
    f64::from(value) * (PI / FIXED_POINT_ONE_EIGHTY)
}

/// Compass bearing in whole degrees [0, 360) from `from` to `to`, measured
/// clockwise from grid north. `None` when the truncated positions coincide.
pub fn bearing(from: &PlanarPoint, to: &PlanarPoint) -> Result<Option<u16>, GeoError> {
    let (x1, y1) = from.truncate()?;
    let (x2, y2) = to.truncate()?;
    let dx = f64::from(x2) - f64::from(x1);
    let dy = f64::from(y2) - f64::from(y1);
    if dx == 0.0 && dy == 0.0 {
        return Ok(None);
    }

    let mut b = dx.atan2(dy).to_degrees().trunc() as i32;
    if b < 0 {
        b += 360;
    }
    Ok(Some(b as u16))
}

/// Whether `target` lies within 90° either side of `heading` as seen from `here`.
///
/// Without a heading every target counts as ahead. A target at `here` itself is
/// treated as bearing 0.
pub fn towards(
    here: &PlanarPoint,
    target: &PlanarPoint,
    heading: Option<u16>,
) -> Result<bool, GeoError> {
    let Some(heading) = heading else {
        return Ok(true);
    };
    let b = bearing(here, target)?.unwrap_or(0);
    let rel = (i32::from(b) - i32::from(heading)).rem_euclid(360);
    Ok(rel <= 90 || rel >= 270)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(PlanarPoint::new(12.9, -7.9).truncate().unwrap(), (12, -7));
    }

    #[test]
    fn test_truncate_rejects_overflow() {
        assert!(matches!(
            PlanarPoint::new(3.0e9, 0.0).truncate(),
            Err(GeoError::OutOfRange(_))
        ));
        assert!(PlanarPoint::new(0.0, f64::NAN).truncate().is_err());
    }

    #[test]
    fn test_distance_squared() {
        let a = PlanarPoint::new(0.4, 0.0);
        let b = PlanarPoint::new(3.0, 4.9);
        assert_eq!(a.distance_squared(&b).unwrap(), 25);
    }

    #[test]
    fn test_meters_to_u32() {
        assert_eq!(meters_to_u32(1234.99).unwrap(), 1234);
        assert!(meters_to_u32(-1.0).is_err());
        assert!(meters_to_u32(5.0e9).is_err());
    }

    #[test]
    fn test_fixed_point_degrees() {
        assert_eq!(degrees_to_fixed(180.0).unwrap(), i32::MAX);
        assert_eq!(degrees_to_fixed(-180.0).unwrap(), -i32::MAX);
        assert_eq!(degrees_to_fixed(0.0).unwrap(), 0);
        assert_eq!(degrees_to_fixed(90.0).unwrap(), 1_073_741_823);
        assert!(degrees_to_fixed(200.0).is_err());

        let v = degrees_to_fixed(38.5).unwrap();
        assert_relative_eq!(fixed_to_degrees(v), 38.5, epsilon = 1e-7);
        assert_relative_eq!(fixed_to_radians(v), 38.5_f64.to_radians(), epsilon = 1e-8);
    }

    #[test]
    fn test_bearing_quadrants() {
        let o = PlanarPoint::default();
        assert_eq!(bearing(&o, &PlanarPoint::new(0.0, 10.0)).unwrap(), Some(0));
        assert_eq!(bearing(&o, &PlanarPoint::new(10.0, 0.0)).unwrap(), Some(90));
        assert_eq!(bearing(&o, &PlanarPoint::new(0.0, -10.0)).unwrap(), Some(180));
        assert_eq!(bearing(&o, &PlanarPoint::new(-10.0, 0.0)).unwrap(), Some(270));
        assert_eq!(bearing(&o, &PlanarPoint::new(0.5, 0.5)).unwrap(), None);
    }

    #[test]
    fn test_towards() {
        let here = PlanarPoint::default();
        let north = PlanarPoint::new(0.0, 100.0);
        assert!(towards(&here, &north, None).unwrap());
        assert!(towards(&here, &north, Some(0)).unwrap());
        assert!(towards(&here, &north, Some(300)).unwrap());
        assert!(!towards(&here, &north, Some(180)).unwrap());
        assert!(towards(&here, &north, Some(90)).unwrap());
    }
}
