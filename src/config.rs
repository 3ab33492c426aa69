//! Tunable numeric parameters shared by the distance, projection and decoding code.

use crate::error::GeoError;

/// Conventional UTM scale factor on the central meridian.
pub const UTM_K0: f64 = 0.9996;

/// Units used when rendering distances for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "metric" | "m" | "km" => Some(Units::Metric),
            "imperial" | "mi" | "ft" => Some(Units::Imperial),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeodesyConfig {
    /// Vincenty stops once successive longitude iterates differ by less than this (radians).
    pub convergence_tolerance: f64,
    /// Upper bound on Vincenty iterations before reporting non-convergence.
    pub max_iterations: usize,
    /// Below this |cos(lat)| the spherical formula is used instead of Vincenty.
    pub pole_cosine_threshold: f64,
    /// Transverse Mercator scale factor k0.
    pub scale_factor: f64,
    /// Degrees per polyline integer unit.
    pub polyline_precision: f64,
    pub units: Units,
}

impl Default for GeodesyConfig {
    fn default() -> Self {
        Self {
            convergence_tolerance: 5.0e-12,
            max_iterations: 200,
            pole_cosine_threshold: 1.0e-20,
            scale_factor: UTM_K0,
            polyline_precision: 1.0e-5,
            units: Units::Metric,
        }
    }
}

impl GeodesyConfig {
    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_scale_factor(mut self, k0: f64) -> Self {
        self.scale_factor = k0;
        self
    }

    pub fn with_polyline_precision(mut self, precision: f64) -> Self {
        self.polyline_precision = precision;
        self
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        if !(self.convergence_tolerance > 0.0) {
            return Err(GeoError::InvalidParameter(format!(
                "convergence_tolerance must be positive, got {}",
                self.convergence_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(GeoError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.pole_cosine_threshold >= 0.0) {
            return Err(GeoError::InvalidParameter(format!(
                "pole_cosine_threshold must be non-negative, got {}",
                self.pole_cosine_threshold
            )));
        }
        if !(self.scale_factor > 0.0) || !self.scale_factor.is_finite() {
            return Err(GeoError::InvalidParameter(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if !(self.polyline_precision > 0.0) || !self.polyline_precision.is_finite() {
            return Err(GeoError::InvalidParameter(format!(
                "polyline_precision must be positive, got {}",
                self.polyline_precision
            )));
        }
        Ok(())
    }
}
