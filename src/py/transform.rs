//! PyO3 bindings for the RD → ETRS89 transform.

use numpy::{PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::batch;
use crate::proj::pipeline;

/// Convert RD coordinates to ETRS89.
///
/// Args:
///     x: RD x in kilometres, within [-7, 300].
///     y: RD y in kilometres, within [289, 629].
///     h: Optional NAP height in metres. Defaults to 0.
///
/// Returns:
///     Tuple of (latitude, longitude) in degrees and ellipsoidal height in metres.
///
/// Raises:
///     ValueError: if fewer than 2 or more than 3 values are given, or if x or y
///         is out of range.
#[pyfunction]
#[pyo3(signature = (*args))]
pub fn from_rd(args: &Bound<'_, PyTuple>) -> PyResult<(f64, f64, f64)> {
    let values: Vec<f64> = args.extract()?;
    pipeline::from_rd_slice(&values).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Convert arrays of RD coordinates to ETRS89.
///
/// Args:
///     x: 1D array of RD x in kilometres.
///     y: 1D array of RD y in kilometres.
///     h: Optional 1D array of NAP heights in metres.
///
/// Returns:
///     (n, 3) array of (latitude, longitude, height) rows.
#[pyfunction]
#[pyo3(signature = (x, y, h=None))]
pub fn from_rd_array<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    h: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    // Copy to owned arrays before releasing the GIL
    let x = x.as_array().to_owned();
    let y = y.as_array().to_owned();
    let h = h.map(|h| h.as_array().to_owned());

    let result = py
        .allow_threads(move || {
            batch::from_rd_array(x.view(), y.view(), h.as_ref().map(|h| h.view()))
        })
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyArray2::from_owned_array(py, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(values: &[f64]) -> PyResult<(f64, f64, f64)> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let args = PyTuple::new(py, values)?;
            from_rd(&args)
        })
    }

    fn assert_value_error(result: PyResult<(f64, f64, f64)>, needle: &str) {
        Python::with_gil(|py| {
            let err = result.unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            let message = err.value(py).to_string();
            assert!(message.contains(needle), "{message}");
        });
    }

    #[test]
    fn test_two_and_three_arguments() {
        assert_eq!(
            call(&[155.0, 463.0]).unwrap(),
            pipeline::from_rd(155.0, 463.0, None).unwrap()
        );
        assert_eq!(
            call(&[155.0, 463.0, 2.0]).unwrap(),
            pipeline::from_rd(155.0, 463.0, Some(2.0)).unwrap()
        );
    }

    #[test]
    fn test_wrong_arity_is_value_error() {
        assert_value_error(call(&[155.0]), "got 1");
        assert_value_error(call(&[155.0, 463.0, 0.0, 1.0]), "got 4");
    }

    #[test]
    fn test_out_of_range_is_value_error() {
        assert_value_error(call(&[400.0, 463.0]), "x = 400");
        assert_value_error(call(&[155.0, 700.0]), "y = 700");
    }
}
