use serde::{Deserialize, Serialize};

// Serializable, comparable, explicit defaults.
// Settings only change how the work is scheduled, never the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Run independent halves on the rayon pool. Ignored unless the crate is
    /// built with the `parallel` feature.
    pub parallel: bool,
    /// Sub-lists shorter than this always recurse sequentially.
    pub parallel_min_buildings: usize,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            parallel: false,
            parallel_min_buildings: 1024,
        }
    }

    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::v0()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}
