//! Empirical RD → Bessel series.
//!
//! Latitude and longitude on the Bessel 1841 ellipsoid are approximated by
//! bivariate polynomials in the normalised RD offsets
//!   x' = x/100 − 1.55,  y' = y/100 − 4.63   (x, y in km)
//! added to the Bessel coordinates of the Amersfoort origin. Coefficients are
//! in arc-seconds and come from a least-squares fit; they are reproduced
//! exactly, not derived.

use crate::coords::{GeodeticCoordinate, PlanarCoordinate};

/// One series term: `coefficient * x'^m * y'^n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub m: i32,
    pub n: i32,
    pub coefficient: f64,
}

const fn term(m: i32, n: i32, coefficient: f64) -> Term {
    Term { m, n, coefficient }
}

/// Bessel latitude of Amersfoort, 52°09′22.178″, in arc-seconds.
pub const LATITUDE_ORIGIN_ARCSEC: f64 = 52.0 * 3600.0 + 9.0 * 60.0 + 22.178;
/// Bessel longitude of Amersfoort, 5°23′15.5″, in arc-seconds.
pub const LONGITUDE_ORIGIN_ARCSEC: f64 = 5.0 * 3600.0 + 23.0 * 60.0 + 15.5;

/// Latitude series, arc-seconds.
pub const LATITUDE_TERMS: [Term; 11] = [
    term(0, 1, 3235.653_89),
    term(2, 0, -32.582_97),
    term(0, 2, -0.247_50),
    term(2, 1, -0.849_78),
    term(0, 3, -0.065_50),
    term(2, 2, -0.017_09),
    term(1, 0, -0.007_38),
    term(4, 0, 0.005_30),
    term(2, 3, -0.000_39),
    term(4, 1, 0.000_33),
    term(1, 1, -0.000_12),
];

/// Longitude series, arc-seconds.
pub const LONGITUDE_TERMS: [Term; 12] = [
    term(1, 0, 5260.529_16),
    term(1, 1, 105.946_84),
    term(1, 2, 2.456_56),
    term(3, 0, -0.818_85),
    term(1, 3, 0.055_94),
    term(3, 1, -0.056_07),
    term(0, 1, 0.011_99),
    term(3, 2, -0.002_56),
    term(1, 4, 0.001_28),
    term(0, 2, 0.000_22),
    term(2, 0, -0.000_22),
    term(5, 0, 0.000_26),
];

/// Sum a series at (x', y'), in table order.
pub fn evaluate<'a, I>(terms: I, dx: f64, dy: f64) -> f64
where
    I: IntoIterator<Item = &'a Term>,
{
    terms
        .into_iter()
        .map(|t| t.coefficient * dx.powi(t.m) * dy.powi(t.n))
        .sum()
}

/// Bessel (latitude, longitude) in arc-seconds for normalised offsets.
pub fn bessel_arcseconds(dx: f64, dy: f64) -> (f64, f64) {
    (
        LATITUDE_ORIGIN_ARCSEC + evaluate(&LATITUDE_TERMS, dx, dy),
        LONGITUDE_ORIGIN_ARCSEC + evaluate(&LONGITUDE_TERMS, dx, dy),
    )
}

/// Approximate Bessel coordinates (degrees) of an RD point. Height passes through.
pub fn approximate_bessel(point: &PlanarCoordinate) -> GeodeticCoordinate {
    let (dx, dy) = point.normalized();
    let (lat, lon) = bessel_arcseconds(dx, dy);
    GeodeticCoordinate::from_arcseconds(lat, lon, point.h)
}
