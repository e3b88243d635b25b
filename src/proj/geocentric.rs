//! Conversions between ellipsoidal (lat, lon, h) and geocentric (X, Y, Z) coordinates.

use tracing::{trace, warn};

use crate::config::SolverConfig;
use crate::coords::{CartesianCoordinate, GeodeticCoordinate};
use crate::error::TransformError;
use crate::proj::ellipsoid::Ellipsoid;

/// Result of the iterative geocentric → geodetic conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticSolution {
    pub coordinate: GeodeticCoordinate,
    /// Number of fixed-point iterations taken to reach the tolerance.
    pub iterations: usize,
}

/// Ellipsoidal coordinates (degrees, metres) to geocentric X, Y, Z (metres).
pub fn geodetic_to_geocentric(
    point: &GeodeticCoordinate,
    ellipsoid: &Ellipsoid,
) -> CartesianCoordinate {
    let phi = point.latitude.to_radians();
    let lambda = point.longitude.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    let n = ellipsoid.prime_vertical_radius(phi);
    let h = point.height;

    CartesianCoordinate::new(
        (n + h) * cos_phi * cos_lambda,
        (n + h) * cos_phi * sin_lambda,
        (n * (1.0 - ellipsoid.e2) + h) * sin_phi,
    )
}

/// Geocentric X, Y, Z (metres) to ellipsoidal coordinates (degrees, metres).
///
/// Longitude is closed-form. Latitude is found by the fixed-point iteration
///   φ ← atan2(z + e²·N(φ)·sin φ, r),  r = sqrt(x² + y²)
/// starting from φ = 0, N·sin φ = z, until two successive estimates differ by
/// at most `config.tolerance`. Height follows as r / cos φ − N.
///
/// Inside the RD domain this settles in about four iterations. Running past
/// `config.max_iterations` yields [`TransformError::NoConvergence`], which also
/// covers non-finite input.
pub fn geocentric_to_geodetic(
    point: &CartesianCoordinate,
    ellipsoid: &Ellipsoid,
    config: &SolverConfig,
) -> Result<GeodeticSolution, TransformError> {
    let CartesianCoordinate { x, y, z } = *point;
    let lambda = y.atan2(x);
    let r = x.hypot(y);

    let mut phi = 0.0_f64;
    let mut n_sin_phi = z;

    for iteration in 1..=config.max_iterations {
        let next = (z + ellipsoid.e2 * n_sin_phi).atan2(r);
        let n = ellipsoid.prime_vertical_radius(next);
        n_sin_phi = n * next.sin();

        if (next - phi).abs() <= config.tolerance {
            trace!(iterations = iteration, "latitude solver converged");
            let height = r / next.cos() - n;
            return Ok(GeodeticSolution {
                coordinate: GeodeticCoordinate::new(next.to_degrees(), lambda.to_degrees(), height),
                iterations: iteration,
            });
        }
        phi = next;
    }

    warn!(
        x = point.x,
        y = point.y,
        z = point.z,
        max_iterations = config.max_iterations,
        "latitude solver did not converge"
    );
    Err(TransformError::NoConvergence {
        iterations: config.max_iterations,
    })
}
