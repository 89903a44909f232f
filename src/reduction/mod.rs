//! Reduction strategies applied to trailing windows.
//!
//! A reduction is a pure function of the windows it is handed: it holds no
//! state across calls and never mutates its inputs. Each built-in lives in
//! its own module; callers implement [`Reduction`] for custom statistics and
//! may register them in a [`crate::registry::ReductionRegistry`].

pub mod mean_difference;
pub mod momentum;
pub mod std_dev;

pub use mean_difference::MeanDifference;
pub use momentum::Momentum;
pub use std_dev::StandardDeviation;

use std::fmt;

use ndarray::ArrayView2;

use crate::error::ComputationError;
use crate::observation::Observation;
use crate::types::ColumnId;

/// A named statistic applied to one or more trailing windows, producing one
/// scalar per entity.
pub trait Reduction: fmt::Debug + Send + Sync {
    /// Unique reduction name.
    fn name(&self) -> &str;

    /// Number of input columns the reduction consumes. Checked against the
    /// configured columns at evaluator construction.
    fn arity(&self) -> usize;

    /// Default input columns, used when the evaluator configuration leaves
    /// `inputs` unset.
    fn default_inputs(&self) -> Option<Vec<ColumnId>> {
        None
    }

    /// Default window length, used when the evaluator configuration leaves
    /// `window_length` unset.
    fn default_window_length(&self) -> Option<usize> {
        None
    }

    /// Apply the statistic.
    ///
    /// `windows` holds one view per input column, in configured order, all of
    /// identical shape (window_length x entity_count) with rows oldest first
    /// and identical entity ordering. The implementation must write one
    /// observation per entity into `out`; positions left as `None` fail
    /// validation in the evaluator.
    ///
    /// # Errors
    /// Returns [`ComputationError`] if the statistic cannot be computed. The
    /// built-in reductions never fail.
    fn reduce(
        &self,
        windows: &[ArrayView2<'_, Observation>],
        out: &mut [Option<Observation>],
    ) -> Result<(), ComputationError>;
}
