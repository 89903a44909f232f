//! Tri-state observations and the trailing-window array type.

use ndarray::Array2;

use crate::error::ShapeError;

/// A single per-entity-per-date observation.
///
/// Missing data is explicit rather than carried through a NaN sentinel:
/// converting from `f64` maps NaN to [`Observation::Missing`], and
/// [`Observation::as_f64`] maps it back. Infinities are ordinary values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// A present, possibly non-finite, value. Never NaN.
    Value(f64),
    /// No observation recorded for this entity on this date.
    Missing,
}

impl Observation {
    /// The inner value, or `None` when missing.
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// The inner value, with `Missing` rendered as NaN.
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Missing => f64::NAN,
        }
    }

    /// Whether this observation is missing.
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for Observation {
    fn from(raw: f64) -> Self {
        if raw.is_nan() {
            Self::Missing
        } else {
            Self::Value(raw)
        }
    }
}

/// Trailing observations of one input column: window_length rows by
/// entity_count columns, ending at (and including) the evaluation date.
/// Rows are ordered oldest first.
///
/// Windows are built fresh by the caller for each evaluation call and are
/// never retained or mutated by the evaluator.
pub type Window = Array2<Observation>;

/// Build a [`Window`] from rows of raw floats, oldest row first, mapping NaN
/// to [`Observation::Missing`].
///
/// # Errors
/// Returns [`ShapeError::RaggedRows`] if the rows differ in length.
pub fn window_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Window, ShapeError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, |row| row.as_ref().len());
    for (index, row) in rows.iter().enumerate() {
        if row.as_ref().len() != ncols {
            return Err(ShapeError::RaggedRows {
                row: index,
                expected: ncols,
                actual: row.as_ref().len(),
            });
        }
    }
    Ok(Array2::from_shape_fn((nrows, ncols), |(i, j)| {
        Observation::from(rows[i].as_ref()[j])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_maps_to_missing() {
        assert!(Observation::from(f64::NAN).is_missing());
        assert_eq!(Observation::from(1.5), Observation::Value(1.5));
        assert_eq!(
            Observation::from(f64::INFINITY),
            Observation::Value(f64::INFINITY)
        );
    }

    #[test]
    fn test_missing_renders_as_nan() {
        assert!(Observation::Missing.as_f64().is_nan());
        assert_eq!(Observation::Value(2.0).as_f64(), 2.0);
        assert_eq!(Observation::Missing.value(), None);
    }

    #[test]
    fn test_window_from_rows() {
        let window = window_from_rows(&[[1.0, f64::NAN], [3.0, 4.0]]).unwrap();
        assert_eq!(window.dim(), (2, 2));
        assert_eq!(window[[0, 0]], Observation::Value(1.0));
        assert!(window[[0, 1]].is_missing());
        assert_eq!(window[[1, 1]], Observation::Value(4.0));
    }

    #[test]
    fn test_window_from_ragged_rows() {
        let result = window_from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(ShapeError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_empty_window() {
        let rows: &[Vec<f64>] = &[];
        let window = window_from_rows(rows).unwrap();
        assert_eq!(window.dim(), (0, 0));
    }
}
