//! Trailing standard deviation of a single input column.

use ndarray::{ArrayView2, Axis};

use super::Reduction;
use crate::error::ComputationError;
use crate::observation::Observation;
use crate::types::ColumnId;

/// Population standard deviation over the trailing window, per entity,
/// with missing observations excluded.
///
/// An entity whose entire window is missing yields a missing output. A
/// single present observation yields 0.0 (population convention).
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDeviation;

impl Reduction for StandardDeviation {
    fn name(&self) -> &str {
        "std_dev"
    }

    fn arity(&self) -> usize {
        1
    }

    fn default_inputs(&self) -> Option<Vec<ColumnId>> {
        Some(vec![ColumnId::from("close")])
    }

    fn reduce(
        &self,
        windows: &[ArrayView2<'_, Observation>],
        out: &mut [Option<Observation>],
    ) -> Result<(), ComputationError> {
        for (entity, column) in windows[0].axis_iter(Axis(1)).enumerate() {
            let present: Vec<f64> = column.iter().filter_map(|obs| obs.value()).collect();
            out[entity] = Some(population_std(&present));
        }
        Ok(())
    }
}

fn population_std(values: &[f64]) -> Observation {
    if values.is_empty() {
        return Observation::Missing;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Observation::from(variance.sqrt())
}
