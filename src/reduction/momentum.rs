//! Momentum: ratio of the newest to the oldest observation in the window.

use ndarray::{ArrayView2, Axis};

use super::Reduction;
use crate::error::ComputationError;
use crate::observation::Observation;
use crate::types::ColumnId;

/// Ratio of the last (newest) to the first (oldest) row of the window, per
/// entity.
///
/// Division follows IEEE 754: a zero denominator yields an infinity, and
/// 0/0 yields NaN, which maps to a missing output. A missing endpoint also
/// yields a missing output. Never a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct Momentum;

impl Reduction for Momentum {
    fn name(&self) -> &str {
        "momentum"
    }

    fn arity(&self) -> usize {
        1
    }

    fn default_inputs(&self) -> Option<Vec<ColumnId>> {
        Some(vec![ColumnId::from("close")])
    }

    fn default_window_length(&self) -> Option<usize> {
        // Ten trading days, the conventional short-term momentum lookback.
        Some(10)
    }

    fn reduce(
        &self,
        windows: &[ArrayView2<'_, Observation>],
        out: &mut [Option<Observation>],
    ) -> Result<(), ComputationError> {
        for (entity, column) in windows[0].axis_iter(Axis(1)).enumerate() {
            let oldest = column[0].value();
            let newest = column[column.len() - 1].value();
            out[entity] = Some(match (oldest, newest) {
                (Some(first), Some(last)) => Observation::from(last / first),
                _ => Observation::Missing,
            });
        }
        Ok(())
    }
}
