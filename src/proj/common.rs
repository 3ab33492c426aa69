//! Common helpers for projection math.

/// Meridian arc length (metres) from the equator to latitude `phi` (radians),
/// on an ellipsoid with semi-major axis `a` and first eccentricity squared `es`.
/// Uses the series expansion in powers of `es` truncated after `es³`.
pub fn meridian_arc_length(phi: f64, a: f64, es: f64) -> f64 {
    if phi == 0.0 {
        return 0.0;
    }

    let es2 = es * es;
    let es3 = es2 * es;

    let a0 = 1.0 - es / 4.0 - 3.0 * es2 / 64.0 - 5.0 * es3 / 256.0;
    let a2 = 3.0 * es / 8.0 + 3.0 * es2 / 32.0 + 45.0 * es3 / 1024.0;
    let a4 = 15.0 * es2 / 256.0 + 45.0 * es3 / 1024.0;
    let a6 = 35.0 * es3 / 3072.0;

    a * (a0 * phi - a2 * (2.0 * phi).sin() + a4 * (4.0 * phi).sin() - a6 * (6.0 * phi).sin())
}
