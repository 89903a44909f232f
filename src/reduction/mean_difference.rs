//! Mean pairwise difference between two input columns.

use ndarray::{ArrayView2, Axis};

use super::Reduction;
use crate::error::ComputationError;
use crate::observation::Observation;
use crate::types::ColumnId;

/// Mean of elementwise (A - B) over the trailing window, per entity.
///
/// Rows where either side is missing are excluded from the mean; an entity
/// with no complete pair in the window yields a missing output.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanDifference;

impl Reduction for MeanDifference {
    fn name(&self) -> &str {
        "mean_difference"
    }

    fn arity(&self) -> usize {
        2
    }

    fn default_inputs(&self) -> Option<Vec<ColumnId>> {
        Some(vec![ColumnId::from("close"), ColumnId::from("open")])
    }

    fn reduce(
        &self,
        windows: &[ArrayView2<'_, Observation>],
        out: &mut [Option<Observation>],
    ) -> Result<(), ComputationError> {
        let (a, b) = (&windows[0], &windows[1]);
        for (entity, (col_a, col_b)) in a
            .axis_iter(Axis(1))
            .zip(b.axis_iter(Axis(1)))
            .enumerate()
        {
            let mut sum = 0.0;
            let mut count = 0_usize;
            for (obs_a, obs_b) in col_a.iter().zip(col_b.iter()) {
                if let (Some(x), Some(y)) = (obs_a.value(), obs_b.value()) {
                    sum += x - y;
                    count += 1;
                }
            }
            out[entity] = Some(if count == 0 {
                Observation::Missing
            } else {
                Observation::from(sum / count as f64)
            });
        }
        Ok(())
    }
}
