/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Inverse flattening 1/f (informational)
    pub rf: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared, as published for the datum
    pub e2: f64,
}

impl Ellipsoid {
    /// Build from the semi-major axis and the inverse flattening, with e² = 2f - f².
    pub const fn new(a: f64, rf: f64) -> Self {
        let f = 1.0 / rf;
        Self::with_eccentricity(a, rf, 2.0 * f - f * f)
    }

    /// Build with a published e² instead of one derived from the flattening.
    ///
    /// The RD chain is defined against rounded published values, so the two
    /// can disagree in the last digits.
    pub const fn with_eccentricity(a: f64, rf: f64, e2: f64) -> Self {
        let f = 1.0 / rf;
        let b = a * (1.0 - f);
        Self { a, rf, f, b, e2 }
    }

    /// Prime-vertical radius of curvature N at geodetic latitude `phi` (radians).
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        let s = phi.sin();
        self.a / (1.0 - self.e2 * s * s).sqrt()
    }
}

/// Bessel 1841, the ellipsoid underlying the RD grid.
pub const BESSEL_1841: Ellipsoid =
    Ellipsoid::with_eccentricity(6_377_397.155, 299.152_812_8, 0.006_674_372_230_614);
/// GRS80, the ellipsoid of ETRS89.
pub const ETRS89: Ellipsoid =
    Ellipsoid::with_eccentricity(6_378_137.0, 298.257_222_101, 0.006_694_380_022_90);
