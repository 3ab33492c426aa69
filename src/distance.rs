//! Geodesic distance on an ellipsoid.
//!
//! [`distance`] solves the inverse problem with Vincenty's iteration on the
//! longitude difference of the auxiliary sphere. [`quick_distance`] is the
//! spherical law of cosines scaled by the semi-major axis, used near the poles
//! where the iteration is singular.

use log::{debug, trace, warn};

use crate::config::GeodesyConfig;
use crate::coord::Coordinate;
use crate::error::{ensure_finite, GeoError};
use crate::proj::datum::Datum;
use crate::proj::ellipsoid::Ellipsoid;

/// Great-circle distance in metres on a sphere of radius `ellipsoid.a`.
pub fn quick_distance(
    c1: &Coordinate,
    c2: &Coordinate,
    ellipsoid: &Ellipsoid,
) -> Result<f64, GeoError> {
    if c1 == c2 {
        return Ok(0.0);
    }

    let (la1, lo1) = (c1.lat_rad(), c1.lon_rad());
    let (la2, lo2) = (c2.lat_rad(), c2.lon_rad());

    // Rounding can push the cosine a hair past ±1 for nearby points.
    let cos_angle = ((lo1 - lo2).cos() * la1.cos() * la2.cos() + la1.sin() * la2.sin())
        .clamp(-1.0, 1.0);
    let dist = ellipsoid.a * cos_angle.acos();

    ensure_finite("quick_distance", &[dist])?;
    Ok(dist)
}

/// Ellipsoidal distance in metres between two points on `datum`.
pub fn distance(c1: &Coordinate, c2: &Coordinate, datum: &Datum) -> Result<f64, GeoError> {
    distance_with(c1, c2, datum, &GeodesyConfig::default())
}

/// [`distance`] with an explicit tolerance, iteration cap and pole threshold.
pub fn distance_with(
    c1: &Coordinate,
    c2: &Coordinate,
    datum: &Datum,
    config: &GeodesyConfig,
) -> Result<f64, GeoError> {
    config.validate()?;
    if c1 == c2 {
        return Ok(0.0);
    }

    let la1 = c1.lat_rad();
    let la2 = c2.lat_rad();
    let lo1 = c1.lon_rad();
    let lo2 = c2.lon_rad();

    let threshold = config.pole_cosine_threshold;
    if la1.cos().abs() < threshold || la2.cos().abs() < threshold {
        debug!("distance: point at a pole, falling back to spherical distance");
        return quick_distance(c1, c2, &datum.ellipsoid);
    }

    let a = datum.ellipsoid.a;
    let f = datum.ellipsoid.f;
    let r = 1.0 - f;

    // Reduced latitudes
    let tu1 = r * la1.tan();
    let tu2 = r * la2.tan();
    let cu1 = 1.0 / (tu1 * tu1 + 1.0).sqrt();
    let su1 = cu1 * tu1;
    let cu2 = 1.0 / (tu2 * tu2 + 1.0).sqrt();
    let s = cu1 * cu2;
    let baz = s * tu2;
    let faz = baz * tu1;
    let czc = faz + faz;

    let dlon = lo2 - lo1;
    let mut x = dlon;
    let mut state = None;

    for iteration in 1..=config.max_iterations {
        let sx = x.sin();
        let cx = x.cos();
        let t1 = cu2 * sx;
        let t2 = baz - su1 * cu2 * cx;
        let sy = (t1 * t1 + t2 * t2).sqrt();
        let cy = s * cx + faz;
        let y = sy.atan2(cy);
        let sa = s * sx / sy;
        let c2a = 1.0 - sa * sa;
        let cz = if c2a > 0.0 { -czc / c2a + cy } else { czc };
        let e = cz * cz * 2.0 - 1.0;
        let c = ((-3.0 * c2a + 4.0) * f + 4.0) * c2a * f / 16.0;

        let prev = x;
        x = (1.0 - c) * ((e * cy * c + cz) * sy * c + y) * sa * f + dlon;

        if x.is_nan() {
            return Err(GeoError::NumericalSingularity(format!(
                "distance iteration diverged between {c1:?} and {c2:?}"
            )));
        }
        if (x - prev).abs() <= config.convergence_tolerance {
            trace!("distance: converged after {iteration} iterations");
            state = Some(Auxiliary { sy, cy, y, c2a, cz, e });
            break;
        }
    }

    let Some(Auxiliary { sy, cy, y, c2a, cz, e }) = state else {
        warn!(
            "distance: no convergence after {} iterations between {:?} and {:?}",
            config.max_iterations, c1, c2
        );
        return Err(GeoError::NonConvergence {
            iterations: config.max_iterations,
        });
    };

    let mut u = ((1.0 / r / r - 1.0) * c2a + 1.0).sqrt() + 1.0;
    u = (u - 2.0) / u;
    let u2 = u * u;
    let d = (0.375 * u2 - 1.0) * u;
    let series =
        (((sy * sy * 4.0 - 3.0) * (1.0 - e - e) * cz * d / 6.0 - e * cy) * d / 4.0 + cz) * sy * d;
    let dist = (series + y) * (u2 / 4.0 + 1.0) / (1.0 - u) * a * r;

    ensure_finite("distance", &[dist])?;
    Ok(dist)
}

/// Auxiliary-sphere quantities from the last Vincenty iteration.
struct Auxiliary {
    sy: f64,
    cy: f64,
    y: f64,
    c2a: f64,
    cz: f64,
    e: f64,
}
