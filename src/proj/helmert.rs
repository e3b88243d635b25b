//! Seven-parameter similarity (Helmert) transformation between geocentric frames.
//!
//! Linearised for small angles: the rotation and scale terms are a few parts
//! per million, so second-order products are dropped. Do not use this with
//! large rotations.

use crate::coords::CartesianCoordinate;

/// Translation, rotation and scale of a small-angle Helmert transformation,
/// applied about a fixed centre point given in the source frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelmertParameters {
    /// Translation (metres)
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    /// Rotation about X, Y, Z (radians)
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Scale change (dimensionless, 1e-6 = 1 ppm)
    pub d: f64,
    /// Centre of rotation and scaling, in the source frame.
    pub centre: CartesianCoordinate,
}

impl HelmertParameters {
    /// Shift `p` from the source frame into the target frame.
    pub fn apply(&self, p: &CartesianCoordinate) -> CartesianCoordinate {
        let Self { a, b, c, d, .. } = *self;
        let dx = p.x - self.centre.x;
        let dy = p.y - self.centre.y;
        let dz = p.z - self.centre.z;

        CartesianCoordinate::new(
            p.x + d * dx + c * dy - b * dz + self.tx,
            p.y - c * dx + d * dy + a * dz + self.ty,
            p.z + b * dx - a * dy + d * dz + self.tz,
        )
    }
}

/// Bessel 1841 (RD) to ETRS89, centred on Amersfoort.
pub const BESSEL_TO_ETRS89: HelmertParameters = HelmertParameters {
    tx: 593.032,
    ty: 26.000,
    tz: 478.741,
    a: 1.9848e-6,
    b: -1.7439e-6,
    c: 9.0587e-6,
    d: 4.0772e-6,
    centre: CartesianCoordinate::new(3_903_453.148, 368_135.313, 5_012_970.306),
};
