/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Inverse flattening 1/f
    pub invf: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: f * (2 - f)
    pub es: f64,
    /// Second eccentricity squared: es / (1 - es)
    pub et2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, invf: f64) -> Self {
        let f = 1.0 / invf;
        let es = f * (2.0 - f);
        Self {
            a,
            invf,
            f,
            b: a * (1.0 - f),
            es,
            et2: es / (1.0 - es),
        }
    }

    /// First eccentricity (computed at runtime, `sqrt` is not const).
    pub fn eccentricity(&self) -> f64 {
        self.es.sqrt()
    }
}

pub const CLARKE_1866: Ellipsoid = Ellipsoid::new(6_378_206.4, 294.978_698_2);
pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_223_563);
