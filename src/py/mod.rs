use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions and attributes.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(transform::from_rd, m)?)?;
    m.add_function(wrap_pyfunction!(transform::from_rd_array, m)?)?;
    Ok(())
}
