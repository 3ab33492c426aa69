//! Geodetic datums: a reference ellipsoid plus the offset of its centre.

use super::ellipsoid::{Ellipsoid, CLARKE_1866, WGS84 as WGS84_ELLIPSOID};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datum {
    pub ellipsoid: Ellipsoid,
    /// Centre offset from the WGS84 origin (metres)
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Datum {
    pub const fn new(ellipsoid: Ellipsoid, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            ellipsoid,
            dx,
            dy,
            dz,
        }
    }

    pub fn from_name(name: &str) -> Option<Datum> {
        match name.to_ascii_uppercase().replace(['-', '_', ' '], "").as_str() {
            "WGS84" => Some(WGS84),
            "NAD27" | "NAD27CONUS" => Some(NAD27_CONUS),
            _ => None,
        }
    }
}

pub const NAD27_CONUS: Datum = Datum::new(CLARKE_1866, -8.0, 160.0, 176.0);
pub const WGS84: Datum = Datum::new(WGS84_ELLIPSOID, 0.0, 0.0, 0.0);
