//! Traversal safety bounds.

use serde::{Deserialize, Serialize};

/// Safety bounds for path construction.
///
/// These are not semantic parameters: on a well-formed acyclic netlist the
/// defaults are never reached. They exist to force an orderly abort when a
/// netlist contains a combinational loop or pathological fan-out that would
/// otherwise make the traversal diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLimits {
    /// Maximum recursion depth of the path constructor.
    pub max_depth: usize,
    /// Maximum number of derived (non-primary) paths one constructor
    /// invocation may process.
    pub max_adjacent_modules: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_depth: 20,
            max_adjacent_modules: 50,
        }
    }
}
