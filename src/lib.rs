#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod observation;
pub mod reduction;
pub mod registry;
pub mod types;

// Re-export main types
pub use error::{ComputationError, ConfigError, FactorError, ShapeError};
pub use evaluator::{EvaluationResult, EvaluatorConfig, FactorEvaluator};
pub use observation::{Observation, Window, window_from_rows};
pub use reduction::{MeanDifference, Momentum, Reduction, StandardDeviation};
pub use registry::{
    ReductionInfo, ReductionRegistry, available_reductions, get_reduction_info,
};
pub use types::{ColumnId, EntityId};
