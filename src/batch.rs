//! Column-wise batch transform over ndarray views.

use ndarray::{Array2, ArrayView1};
use tracing::debug;

use crate::coords::PlanarCoordinate;
use crate::error::{ArgumentError, TransformError};
use crate::proj::pipeline::RdTransformer;

/// Transform columns of RD coordinates to ETRS89.
///
/// # Arguments
/// * `x`, `y` — RD coordinates in kilometres
/// * `h` — optional heights in metres; zero when absent
///
/// Returns an `(n, 3)` array whose rows are (latitude°, longitude°, height m).
/// Any invalid point fails the whole batch; no partial output is returned.
pub fn from_rd_array(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    h: Option<ArrayView1<'_, f64>>,
) -> Result<Array2<f64>, TransformError> {
    transform_columns(&RdTransformer::default(), x, y, h)
}

/// [`from_rd_array`] with an explicit transformer.
pub fn transform_columns(
    transformer: &RdTransformer,
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    h: Option<ArrayView1<'_, f64>>,
) -> Result<Array2<f64>, TransformError> {
    let n = x.len();
    let h_len = h.as_ref().map(|h| h.len());
    if y.len() != n || h_len.is_some_and(|len| len != n) {
        return Err(ArgumentError::LengthMismatch {
            x: n,
            y: y.len(),
            h: h_len,
        }
        .into());
    }
    debug!(points = n, "transforming RD batch");

    let mut out = Array2::zeros((n, 3));
    for (i, mut row) in out.rows_mut().into_iter().enumerate() {
        let height = h.as_ref().map_or(0.0, |h| h[i]);
        let g = transformer.transform(&PlanarCoordinate::new(x[i], y[i], height))?;
        row[0] = g.latitude;
        row[1] = g.longitude;
        row[2] = g.height;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::pipeline::from_rd;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_matches_point_transform() {
        let x = array![155.0, 121.687, 233.883];
        let y = array![463.0, 487.484, 582.065];
        let h = array![0.0, 5.0, -2.0];

        let out = from_rd_array(x.view(), y.view(), Some(h.view())).unwrap();
        assert_eq!(out.dim(), (3, 3));
        for i in 0..3 {
            let (lat, lon, height) = from_rd(x[i], y[i], Some(h[i])).unwrap();
            assert_relative_eq!(out[(i, 0)], lat);
            assert_relative_eq!(out[(i, 1)], lon);
            assert_relative_eq!(out[(i, 2)], height);
        }
    }

    #[test]
    fn test_missing_heights_default_to_zero() {
        let x = array![100.0, 200.0];
        let y = array![400.0, 500.0];
        let out = from_rd_array(x.view(), y.view(), None).unwrap();
        let (lat, lon, height) = from_rd(200.0, 500.0, None).unwrap();
        assert_relative_eq!(out[(1, 0)], lat);
        assert_relative_eq!(out[(1, 1)], lon);
        assert_relative_eq!(out[(1, 2)], height);
    }

    #[test]
    fn test_empty_input() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        let out = from_rd_array(empty.view(), empty.view(), None).unwrap();
        assert_eq!(out.dim(), (0, 3));
    }

    #[test]
    fn test_length_mismatch() {
        let x = array![155.0, 156.0];
        let y = array![463.0];
        let err = from_rd_array(x.view(), y.view(), None).unwrap_err();
        assert_eq!(
            err.as_argument(),
            Some(&ArgumentError::LengthMismatch {
                x: 2,
                y: 1,
                h: None
            })
        );

        let y = array![463.0, 464.0];
        let h = array![0.0, 0.0, 0.0];
        let err = from_rd_array(x.view(), y.view(), Some(h.view())).unwrap_err();
        assert_eq!(
            err.as_argument(),
            Some(&ArgumentError::LengthMismatch {
                x: 2,
                y: 2,
                h: Some(3)
            })
        );
    }

    #[test]
    fn test_invalid_point_fails_batch() {
        let x = array![155.0, 400.0];
        let y = array![463.0, 463.0];
        let err = from_rd_array(x.view(), y.view(), None).unwrap_err();
        assert!(err.to_string().contains("x = 400"), "{err}");
    }
}
