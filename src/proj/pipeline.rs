//! Pipeline — RD (km, NAP height) to ETRS89 (degrees, ellipsoidal height).
//!
//! Stages, in order:
//!   1. series approximation RD → Bessel latitude/longitude
//!   2. Bessel ellipsoidal → geocentric
//!   3. Helmert shift Bessel → ETRS89 geocentric
//!   4. ETRS89 geocentric → ellipsoidal (iterative)
//!
//! Accuracy is roughly 25 cm horizontally and 1 m vertically, and only near
//! the Netherlands.

use tracing::debug;

use crate::config::SolverConfig;
use crate::coords::{GeodeticCoordinate, PlanarCoordinate};
use crate::error::{ArgumentError, TransformError};
use crate::proj::ellipsoid::{Ellipsoid, BESSEL_1841, ETRS89};
use crate::proj::geocentric::{geocentric_to_geodetic, geodetic_to_geocentric, GeodeticSolution};
use crate::proj::helmert::{HelmertParameters, BESSEL_TO_ETRS89};
use crate::proj::polynomial::approximate_bessel;

/// The RD → ETRS89 transformation chain.
///
/// Holds only copies of the fixed constants plus solver settings, so it is
/// `Copy` and can be shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RdTransformer {
    source: Ellipsoid,
    target: Ellipsoid,
    datum_shift: HelmertParameters,
    solver: SolverConfig,
}

impl Default for RdTransformer {
    fn default() -> Self {
        Self::with_config(SolverConfig::default())
    }
}

impl RdTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the fixed Bessel → ETRS89 constants with custom solver settings.
    pub fn with_config(solver: SolverConfig) -> Self {
        Self {
            source: BESSEL_1841,
            target: ETRS89,
            datum_shift: BESSEL_TO_ETRS89,
            solver,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.solver
    }

    /// Transform a single RD point to ETRS89.
    pub fn transform(
        &self,
        point: &PlanarCoordinate,
    ) -> Result<GeodeticCoordinate, TransformError> {
        self.solve(point).map(|s| s.coordinate)
    }

    /// Like [`transform`](Self::transform), also reporting how many solver
    /// iterations the final step took.
    pub fn solve(&self, point: &PlanarCoordinate) -> Result<GeodeticSolution, TransformError> {
        if let Err(e) = point.validate() {
            debug!(x = point.x, y = point.y, "rejected RD coordinate: {e}");
            return Err(e.into());
        }

        let bessel = approximate_bessel(point);
        let bessel_xyz = geodetic_to_geocentric(&bessel, &self.source);
        let etrs_xyz = self.datum_shift.apply(&bessel_xyz);
        geocentric_to_geodetic(&etrs_xyz, &self.target, &self.solver)
    }

    /// Transform a slice of RD points. Fails on the first invalid point.
    pub fn transform_batch(
        &self,
        points: &[PlanarCoordinate],
    ) -> Result<Vec<GeodeticCoordinate>, TransformError> {
        points.iter().map(|p| self.transform(p)).collect()
    }
}

/// Convert RD coordinates to ETRS89.
///
/// `x` and `y` are in kilometres, `h` in metres (defaults to 0). Returns
/// (latitude°, longitude°, ellipsoidal height in metres).
///
/// # Errors
/// [`TransformError::InvalidArgument`] when `x` is outside [-7, 300] or `y`
/// outside [289, 629].
pub fn from_rd(x: f64, y: f64, h: Option<f64>) -> Result<(f64, f64, f64), TransformError> {
    let point = PlanarCoordinate::new(x, y, h.unwrap_or(0.0));
    RdTransformer::default()
        .transform(&point)
        .map(|g| g.to_tuple())
}

/// Positional form of [`from_rd`]: `[x, y]` or `[x, y, h]`.
pub fn from_rd_slice(values: &[f64]) -> Result<(f64, f64, f64), TransformError> {
    match *values {
        [x, y] => from_rd(x, y, None),
        [x, y, h] => from_rd(x, y, Some(h)),
        _ => Err(ArgumentError::Arity(values.len()).into()),
    }
}
