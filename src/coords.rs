//! Value types flowing through the RD → ETRS89 pipeline.

use std::fmt;

use crate::error::ArgumentError;

/// Valid RD x range in kilometres (inclusive).
pub const X_RANGE_KM: (f64, f64) = (-7.0, 300.0);
/// Valid RD y range in kilometres (inclusive).
pub const Y_RANGE_KM: (f64, f64) = (289.0, 629.0);

/// Planar RD axis, used to report which coordinate failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A point on the RD grid.
///
/// `x` and `y` are in kilometres, `h` is the height in metres above the
/// local vertical datum (NAP). Height is not range-checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarCoordinate {
    pub x: f64,
    pub y: f64,
    pub h: f64,
}

impl PlanarCoordinate {
    pub fn new(x: f64, y: f64, h: f64) -> Self {
        Self { x, y, h }
    }

    /// A point at height 0.
    pub fn at_datum(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Check that `x` and `y` lie inside the RD domain.
    ///
    /// Bounds are inclusive. NaN fails on whichever axis carries it, `x` first.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        check_axis(Axis::X, self.x, X_RANGE_KM)?;
        check_axis(Axis::Y, self.y, Y_RANGE_KM)
    }

    /// Offsets from the Amersfoort origin in units of 100 km.
    pub fn normalized(&self) -> (f64, f64) {
        (self.x / 100.0 - 1.55, self.y / 100.0 - 4.63)
    }
}

fn check_axis(axis: Axis, value: f64, (min, max): (f64, f64)) -> Result<(), ArgumentError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ArgumentError::OutOfRange {
            axis,
            value,
            min,
            max,
        })
    }
}

/// Ellipsoidal coordinates: latitude and longitude in degrees, height in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl GeodeticCoordinate {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Build from latitude/longitude in arc-seconds.
    pub fn from_arcseconds(latitude: f64, longitude: f64, height: f64) -> Self {
        Self::new(latitude / 3600.0, longitude / 3600.0, height)
    }

    /// (latitude, longitude, height)
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.latitude, self.longitude, self.height)
    }
}

/// Geocentric Cartesian coordinates in metres. The frame is implied by the
/// ellipsoid and datum that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianCoordinate {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
