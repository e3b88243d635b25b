//! Stages of the RD → ETRS89 transformation.

pub mod ellipsoid;
pub mod geocentric;
pub mod helmert;
pub mod pipeline;
pub mod polynomial;
