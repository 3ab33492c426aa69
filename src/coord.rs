//! Geographic coordinates in decimal degrees with cached radian forms.

use std::f64::consts::PI;

use crate::error::GeoError;

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// A latitude/longitude pair.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. [`Coordinate::new`]
/// does not check this; use [`Coordinate::try_new`] for untrusted input.
///
/// Equality compares the degree values exactly. A coordinate recomputed through
/// radians will generally not compare equal to the original; use
/// [`Coordinate::approx_eq`] when a tolerance is wanted.
#[derive(Clone, Copy, Debug)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
    lat_rad: f64,
    lon_rad: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            lat_rad: degrees_to_radians(lat),
            lon_rad: degrees_to_radians(lon),
        }
    }

    pub fn try_new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::InvalidCoordinate(format!(
                "non-finite value ({lat}, {lon})"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidCoordinate(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidCoordinate(format!(
                "longitude {lon} outside [-180, 180]"
            )));
        }
        Ok(Self::new(lat, lon))
    }

    pub fn from_radians(lat_rad: f64, lon_rad: f64) -> Self {
        Self::new(radians_to_degrees(lat_rad), radians_to_degrees(lon_rad))
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat_rad
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon_rad
    }

    pub fn approx_eq(&self, other: &Coordinate, epsilon_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= epsilon_deg && (self.lon - other.lon).abs() <= epsilon_deg
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
