//! Windowed factor evaluation.

use std::collections::HashSet;
use std::sync::Arc;

use ndarray::{Array1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FactorError, Result, ShapeError};
use crate::observation::{Observation, Window};
use crate::reduction::Reduction;
use crate::types::{ColumnId, EntityId};

/// Configuration for a [`FactorEvaluator`].
///
/// Every field is optional; unset fields fall back to the defaults the
/// reduction declares. Resolution happens once, at construction, before any
/// evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Columns to request windows for. Defaults to the reduction's declared
    /// inputs.
    pub inputs: Option<Vec<ColumnId>>,
    /// Number of trailing observations per window. Defaults to the
    /// reduction's declared window length.
    pub window_length: Option<usize>,
    /// Entities to evaluate. Entities outside the mask are excluded from the
    /// input windows and the output; unset evaluates every supplied entity.
    pub mask: Option<Vec<EntityId>>,
}

/// Per-entity scalars produced by one evaluation call, paired with the
/// entity ordering they were computed under.
///
/// Associating the result with an evaluation date, and any downstream
/// screening or aggregation, is the calling engine's concern.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    entities: Vec<EntityId>,
    values: Array1<Observation>,
}

impl EvaluationResult {
    /// Evaluated entities, in the caller's ordering (minus masked-out ones).
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// One scalar per entity, aligned with [`Self::entities`].
    pub const fn values(&self) -> &Array1<Observation> {
        &self.values
    }

    /// Number of evaluated entities.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result is empty (the mask excluded every entity).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Scalar for one entity, or `None` if it was not evaluated.
    pub fn get(&self, entity: &EntityId) -> Option<Observation> {
        self.entities
            .iter()
            .position(|candidate| candidate == entity)
            .map(|index| self.values[index])
    }

    /// Iterate over (entity, scalar) pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, Observation)> {
        self.entities.iter().zip(self.values.iter().copied())
    }
}

/// Applies a [`Reduction`] to trailing windows of input data, producing one
/// scalar per entity per evaluation date.
///
/// The evaluator is stateless across calls: each [`evaluate`](Self::evaluate)
/// is a pure function of the windows it is handed, so a single instance may
/// serve any number of evaluation dates, in any order, from any thread.
#[derive(Debug, Clone)]
pub struct FactorEvaluator {
    reduction: Arc<dyn Reduction>,
    inputs: Vec<ColumnId>,
    window_length: usize,
    mask: Option<HashSet<EntityId>>,
}

impl FactorEvaluator {
    /// Resolve `config` against the reduction's defaults and validate it.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if no input columns are available, the window
    /// length is missing or zero, or the reduction's declared arity does not
    /// match the number of configured columns.
    pub fn new(reduction: Arc<dyn Reduction>, config: EvaluatorConfig) -> Result<Self> {
        let inputs = match config.inputs {
            Some(inputs) => inputs,
            None => reduction.default_inputs().unwrap_or_default(),
        };
        if inputs.is_empty() {
            return Err(ConfigError::NoInputs.into());
        }

        let window_length = config
            .window_length
            .or_else(|| reduction.default_window_length())
            .ok_or_else(|| ConfigError::UnspecifiedWindowLength(reduction.name().to_owned()))?;
        if window_length == 0 {
            return Err(ConfigError::InvalidWindowLength(0).into());
        }

        if reduction.arity() != inputs.len() {
            return Err(ConfigError::ArityMismatch {
                reduction: reduction.name().to_owned(),
                expected: reduction.arity(),
                actual: inputs.len(),
            }
            .into());
        }

        let mask = config.mask.map(|entities| entities.into_iter().collect());
        Ok(Self {
            reduction,
            inputs,
            window_length,
            mask,
        })
    }

    /// Columns the caller must supply windows for, in order.
    pub fn inputs(&self) -> &[ColumnId] {
        &self.inputs
    }

    /// Number of trailing observations per window.
    pub const fn window_length(&self) -> usize {
        self.window_length
    }

    /// Name of the underlying reduction.
    pub fn reduction_name(&self) -> &str {
        self.reduction.name()
    }

    /// Apply the reduction for one evaluation date.
    ///
    /// `windows` holds one array per configured input column, in input
    /// order. Every window must be (window_length x entities.len()), rows
    /// oldest first, with column ordering identical to `entities`. Input
    /// windows are never mutated or retained.
    ///
    /// # Errors
    /// Returns [`ShapeError`] if the delivery does not match the
    /// configuration, [`FactorError::Computation`] if the reduction fails,
    /// or [`FactorError::Unpopulated`] if it leaves an output position
    /// unwritten. A failed call produces no result.
    pub fn evaluate(
        &self,
        entities: &[EntityId],
        windows: &[Window],
    ) -> Result<EvaluationResult> {
        self.check_shapes(entities.len(), windows)?;

        let keep: Vec<usize> = match &self.mask {
            Some(mask) => entities
                .iter()
                .enumerate()
                .filter(|(_, entity)| mask.contains(entity))
                .map(|(index, _)| index)
                .collect(),
            None => (0..entities.len()).collect(),
        };
        let kept_entities: Vec<EntityId> = keep.iter().map(|&i| entities[i].clone()).collect();

        // Column selection only copies when a mask is active; the unmasked
        // path borrows the caller's windows directly.
        let masked: Option<Vec<Window>> = self
            .mask
            .as_ref()
            .map(|_| windows.iter().map(|w| w.select(Axis(1), &keep)).collect());
        let views: Vec<ArrayView2<'_, Observation>> = match &masked {
            Some(owned) => owned.iter().map(Window::view).collect(),
            None => windows.iter().map(Window::view).collect(),
        };

        let mut out: Vec<Option<Observation>> = vec![None; keep.len()];
        self.reduction.reduce(&views, &mut out)?;

        let mut values = Vec::with_capacity(out.len());
        for (index, slot) in out.into_iter().enumerate() {
            match slot {
                Some(observation) => values.push(observation),
                None => {
                    return Err(FactorError::Unpopulated {
                        reduction: self.reduction.name().to_owned(),
                        index,
                    });
                }
            }
        }

        Ok(EvaluationResult {
            entities: kept_entities,
            values: Array1::from_vec(values),
        })
    }

    fn check_shapes(&self, entity_count: usize, windows: &[Window]) -> Result<()> {
        if windows.len() != self.inputs.len() {
            return Err(ShapeError::WindowCount {
                expected: self.inputs.len(),
                actual: windows.len(),
            }
            .into());
        }
        for (column, window) in self.inputs.iter().zip(windows) {
            if window.nrows() != self.window_length {
                return Err(ShapeError::RowCount {
                    column: column.clone(),
                    expected: self.window_length,
                    actual: window.nrows(),
                }
                .into());
            }
            if window.ncols() != entity_count {
                return Err(ShapeError::EntityCount {
                    column: column.clone(),
                    expected: entity_count,
                    actual: window.ncols(),
                }
                .into());
            }
        }
        Ok(())
    }
}
