//! Reduction registry
//!
//! Static metadata for the built-in reductions plus a dynamic registry the
//! caller can extend with custom reductions, looked up by name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::reduction::{MeanDifference, Momentum, Reduction, StandardDeviation};

/// Reduction metadata
#[derive(Debug, Clone)]
pub struct ReductionInfo {
    /// Reduction name (unique identifier)
    pub name: &'static str,
    /// Number of input columns consumed
    pub arity: usize,
    /// Brief description of the statistic
    pub description: &'static str,
}

/// Get metadata for all built-in reductions
pub fn available_reductions() -> Vec<ReductionInfo> {
    vec![
        ReductionInfo {
            name: "std_dev",
            arity: 1,
            description: "Population standard deviation over the trailing window, missing excluded",
        },
        ReductionInfo {
            name: "mean_difference",
            arity: 2,
            description: "Mean elementwise difference of two columns, incomplete pairs excluded",
        },
        ReductionInfo {
            name: "momentum",
            arity: 1,
            description: "Ratio of the newest to the oldest observation in the window",
        },
    ]
}

/// Get metadata for one built-in reduction by name
pub fn get_reduction_info(name: &str) -> Option<ReductionInfo> {
    available_reductions().into_iter().find(|r| r.name == name)
}

/// Name-to-implementation registry of reductions.
///
/// The caller registers custom [`Reduction`] implementations alongside the
/// built-ins and resolves them by name when wiring up evaluators.
#[derive(Debug, Default)]
pub struct ReductionRegistry {
    reductions: HashMap<String, Arc<dyn Reduction>>,
}

impl ReductionRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in reductions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(StandardDeviation));
        registry.register(Arc::new(MeanDifference));
        registry.register(Arc::new(Momentum));
        registry
    }

    /// Register a reduction under its declared name, replacing any previous
    /// registration with that name.
    pub fn register(&mut self, reduction: Arc<dyn Reduction>) {
        self.reductions.insert(reduction.name().to_owned(), reduction);
    }

    /// Look up a reduction by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Reduction>> {
        self.reductions.get(name).cloned()
    }

    /// Whether a reduction is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.reductions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.reductions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered reductions.
    pub fn len(&self) -> usize {
        self.reductions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.reductions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::ArrayView2;

    use super::*;
    use crate::error::ComputationError;
    use crate::observation::Observation;

    #[test]
    fn test_available_reductions_count() {
        assert_eq!(available_reductions().len(), 3);
    }

    #[test]
    fn test_get_reduction_info() {
        let info = get_reduction_info("mean_difference").unwrap();
        assert_eq!(info.arity, 2);
        assert!(get_reduction_info("nonexistent").is_none());
    }

    #[test]
    fn test_builtins_registered() {
        let registry = ReductionRegistry::with_builtins();
        assert_eq!(registry.names(), ["mean_difference", "momentum", "std_dev"]);
        assert!(registry.contains("std_dev"));
        assert!(registry.get("momentum").is_some());
    }

    #[test]
    fn test_metadata_matches_implementations() {
        let registry = ReductionRegistry::with_builtins();
        for info in available_reductions() {
            let reduction = registry.get(info.name).unwrap();
            assert_eq!(reduction.name(), info.name);
            assert_eq!(reduction.arity(), info.arity);
        }
    }

    /// Passes every observation through unchanged from the newest row.
    #[derive(Debug)]
    struct Latest;

    impl Reduction for Latest {
        fn name(&self) -> &str {
            "latest"
        }

        fn arity(&self) -> usize {
            1
        }

        fn reduce(
            &self,
            windows: &[ArrayView2<'_, Observation>],
            out: &mut [Option<Observation>],
        ) -> Result<(), ComputationError> {
            let window = &windows[0];
            for (entity, slot) in out.iter_mut().enumerate() {
                *slot = Some(window[[window.nrows() - 1, entity]]);
            }
            Ok(())
        }
    }

    #[test]
    fn test_caller_registration() {
        let mut registry = ReductionRegistry::with_builtins();
        registry.register(Arc::new(Latest));
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get("latest").unwrap().arity(), 1);
    }
}
