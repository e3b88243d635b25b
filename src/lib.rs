//! Approximate transformation from Dutch RD grid coordinates (km, NAP height)
//! to ETRS89 latitude, longitude and ellipsoidal height.
//!
//! ```
//! let (lat, lon, h) = _rust::from_rd(155.0, 463.0, None).unwrap();
//! assert!((lat - 52.1552).abs() < 1e-3 && (lon - 5.3872).abs() < 1e-3);
//! assert!(h > 40.0);
//! ```

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod batch;
pub mod config;
pub mod coords;
pub mod error;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use config::SolverConfig;
pub use coords::{Axis, CartesianCoordinate, GeodeticCoordinate, PlanarCoordinate};
pub use error::{ArgumentError, TransformError};
pub use proj::pipeline::{from_rd, from_rd_slice, RdTransformer};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
